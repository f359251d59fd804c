use crate::geom;
use boardedit_core::{OutlineError, Point};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Polygon with holes. Contour 0 is the outer boundary, the rest are holes.
/// Contours are implicitly closed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolygonOutline {
    pub contours: Vec<Vec<Point>>,
}

impl PolygonOutline {
    pub fn new(outer: Vec<Point>) -> Self {
        Self {
            contours: vec![outer],
        }
    }

    pub fn with_hole(mut self, hole: Vec<Point>) -> Self {
        self.contours.push(hole);
        self
    }

    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    pub fn contour(&self, contour: usize) -> Option<&[Point]> {
        self.contours.get(contour).map(Vec::as_slice)
    }

    pub fn vertex(&self, contour: usize, vertex: usize) -> Option<Point> {
        self.contours.get(contour)?.get(vertex).copied()
    }

    pub fn set_vertex(&mut self, contour: usize, vertex: usize, p: Point) -> Result<(), OutlineError> {
        let slot = self
            .contours
            .get_mut(contour)
            .and_then(|c| c.get_mut(vertex))
            .ok_or(OutlineError::InvalidIndex { contour, vertex })?;
        *slot = p;
        Ok(())
    }

    /// Total number of vertices over all contours.
    pub fn vertex_count(&self) -> usize {
        self.contours.iter().map(Vec::len).sum()
    }

    /// Edges of one contour as `(from, to)`, including the closing edge.
    pub fn edges(&self, contour: usize) -> impl Iterator<Item = (Point, Point)> + '_ {
        let pts = self.contour(contour).unwrap_or(&[]);
        let n = pts.len();
        let count = if n >= 2 { n } else { 0 };
        (0..count).map(move |i| (pts[i], pts[(i + 1) % n]))
    }

    /// Inserts `p` after vertex `after`, i.e. onto edge `after`.
    pub fn insert_vertex(&mut self, contour: usize, after: usize, p: Point) -> Result<(), OutlineError> {
        let pts = self
            .contours
            .get_mut(contour)
            .filter(|c| after < c.len())
            .ok_or(OutlineError::InvalidIndex {
                contour,
                vertex: after,
            })?;
        pts.insert(after + 1, p);
        Ok(())
    }

    /// Removes a vertex.
    ///
    /// A hole that would drop below three vertices is removed entirely; the
    /// outer contour never goes below three.
    pub fn remove_vertex(&mut self, contour: usize, vertex: usize) -> Result<(), OutlineError> {
        let count = match self.contours.get(contour) {
            Some(c) if vertex < c.len() => c.len(),
            _ => return Err(OutlineError::InvalidIndex { contour, vertex }),
        };

        if count <= 3 {
            if contour == 0 {
                return Err(OutlineError::TooFewVertices {
                    contour,
                    count: count - 1,
                });
            }
            debug!("Removing hole {} with its last removable vertex", contour);
            self.contours.remove(contour);
            return Ok(());
        }

        self.contours[contour].remove(vertex);
        Ok(())
    }

    /// Nearest edge to `cursor` over all contours.
    ///
    /// Returns `(contour, edge, projection)` where `edge` indexes the edge's
    /// first vertex and `projection` is the closest point on that edge.
    pub fn nearest_edge(&self, cursor: Point) -> Option<(usize, usize, Point)> {
        let c = cursor.to_vector();
        let mut best: Option<(f64, usize, usize, Point)> = None;

        for contour in 0..self.contours.len() {
            for (edge, (a, b)) in self.edges(contour).enumerate() {
                let proj = geom::nearest_on_segment(c, a.to_vector(), b.to_vector());
                let d = (proj - c).norm_squared();
                if best.map_or(true, |(bd, ..)| d < bd) {
                    let Some(p) = Point::from_vector(proj) else {
                        continue;
                    };
                    best = Some((d, contour, edge, p));
                }
            }
        }

        best.map(|(_, contour, edge, p)| (contour, edge, p))
    }

    pub fn translate(&mut self, dx: i64, dy: i64) {
        for p in self.contours.iter_mut().flatten() {
            *p = p.translated(dx, dy);
        }
    }
}
