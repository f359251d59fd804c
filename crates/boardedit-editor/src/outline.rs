//! Polygon outline validation.
//!
//! An edited outline is only committed when every contour is a simple
//! polygon and no two contours cross. Tests use the exact orientation
//! predicate from [`geom::orient`], so the result never depends on
//! floating point rounding.

use crate::geom;
use crate::model::PolygonOutline;
use boardedit_core::{OutlineError, Point};
use tracing::trace;

/// Checks that the outline is a valid polygon with holes.
///
/// - every contour has at least 3 vertices
/// - no edge has zero length
/// - no contour intersects itself, including adjacent edges folding back
///   over each other
/// - no two contours cross or touch
pub fn validate_outline(outline: &PolygonOutline) -> Result<(), OutlineError> {
    for (contour, pts) in outline.contours.iter().enumerate() {
        validate_contour(contour, pts)?;
    }

    for first in 0..outline.contours.len() {
        for second in first + 1..outline.contours.len() {
            if contours_cross(outline, first, second) {
                return Err(OutlineError::ContourCrossing { first, second });
            }
        }
    }

    trace!("Outline with {} contours is valid", outline.contours.len());
    Ok(())
}

pub fn is_valid_outline(outline: &PolygonOutline) -> bool {
    validate_outline(outline).is_ok()
}

fn validate_contour(contour: usize, pts: &[Point]) -> Result<(), OutlineError> {
    let n = pts.len();
    if n < 3 {
        return Err(OutlineError::TooFewVertices { contour, count: n });
    }

    for vertex in 0..n {
        if pts[vertex] == pts[(vertex + 1) % n] {
            return Err(OutlineError::DegenerateEdge { contour, vertex });
        }
    }

    // Adjacent edges share a vertex; they are only invalid when the second
    // one runs back along the first.
    for v in 0..n {
        let prev = pts[(v + n - 1) % n];
        let here = pts[v];
        let next = pts[(v + 1) % n];
        if geom::orient(prev, here, next) == 0 && dot(prev, here, next) > 0 {
            return Err(OutlineError::SelfIntersection { contour });
        }
    }

    for i in 0..n {
        for j in i + 2..n {
            // edge n-1 closes back onto edge 0
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a1, a2) = (pts[i], pts[(i + 1) % n]);
            let (b1, b2) = (pts[j], pts[(j + 1) % n]);
            if geom::segments_intersect(a1, a2, b1, b2) {
                return Err(OutlineError::SelfIntersection { contour });
            }
        }
    }

    Ok(())
}

fn contours_cross(outline: &PolygonOutline, first: usize, second: usize) -> bool {
    outline.edges(first).any(|(a1, a2)| {
        outline
            .edges(second)
            .any(|(b1, b2)| geom::segments_intersect(a1, a2, b1, b2))
    })
}

/// `(a - o) . (b - o)`, exact.
fn dot(a: Point, o: Point, b: Point) -> i128 {
    let ax = a.x as i128 - o.x as i128;
    let ay = a.y as i128 - o.y as i128;
    let bx = b.x as i128 - o.x as i128;
    let by = b.y as i128 - o.y as i128;
    ax * bx + ay * by
}
