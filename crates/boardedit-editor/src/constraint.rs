//! Direction snapping while the constraint modifier is held.
//!
//! A [`Constraint`] remembers a reference point (the "constrainer") taken from
//! the shape when the modifier becomes active. Each drag sample is then
//! snapped to the nearest horizontal, vertical or diagonal direction through
//! that point.

use crate::geom::Vec2;
use crate::model::Shape;
use crate::points::{PointRole, PointSet};
use boardedit_core::{ConstraintMode, Point};

const SQRT_HALF: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Ray directions from the partner, axis-aligned first. The order is the
/// tie-break: an earlier candidate wins on equal distance.
const RAYS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (0.0, 1.0),
    (-1.0, 0.0),
    (0.0, -1.0),
    (SQRT_HALF, SQRT_HALF),
    (-SQRT_HALF, SQRT_HALF),
    (-SQRT_HALF, -SQRT_HALF),
    (SQRT_HALF, -SQRT_HALF),
];

/// Line directions for [`ConstraintMode::Line`]: 0°, 90°, 45°, 135°.
const LINES: [(f64, f64); 4] = [RAYS[0], RAYS[1], RAYS[4], RAYS[5]];

/// Snaps `edited` to the nearest 45° direction through `partner`.
///
/// In [`ConstraintMode::FortyFive`] the directions are rays: a projection
/// behind `partner` collapses onto it. In [`ConstraintMode::Line`] they are
/// full lines, so the point can pass through `partner`.
pub fn compute_constrainer(edited: Point, partner: Point, mode: ConstraintMode) -> Point {
    let origin = partner.to_vector();
    let target = edited.to_vector();
    let offset = target - origin;

    let rays: &[(f64, f64)] = match mode {
        ConstraintMode::FortyFive => &RAYS,
        ConstraintMode::Line => &LINES,
    };

    let mut best = origin;
    let mut best_dist = f64::INFINITY;

    for &(dx, dy) in rays {
        let dir = Vec2::new(dx, dy);
        let mut t = offset.dot(&dir);
        if mode == ConstraintMode::FortyFive && t < 0.0 {
            t = 0.0;
        }
        let candidate = origin + dir * t;
        let dist = (candidate - target).norm_squared();
        if dist < best_dist {
            best_dist = dist;
            best = candidate;
        }
    }

    Point::from_vector(best).unwrap_or(partner)
}

/// Reference point for snapping the handle at `index`.
///
/// - segment endpoint: the other endpoint
/// - arc start, mid or end: the arc center
/// - outline vertex: the previous vertex of its contour
/// - anything else: the drag-start position
pub fn partner_for(shape: &Shape, points: &PointSet, index: usize, original: Point) -> Point {
    let Some(handle) = points.get(index) else {
        return original;
    };

    let partner = match (shape, handle.role) {
        (Shape::Segment(seg), PointRole::SegmentStart) => Some(seg.end),
        (Shape::Segment(seg), PointRole::SegmentEnd) => Some(seg.start),
        (Shape::Arc(arc), PointRole::ArcStart | PointRole::ArcMid | PointRole::ArcEnd) => {
            Some(arc.center)
        }
        (Shape::Outline(_), PointRole::Vertex { .. }) => points
            .previous_index(index)
            .and_then(|prev| points.position(prev)),
        _ => None,
    };

    partner.unwrap_or(original)
}

/// An active snapping constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub constrainer: Point,
    pub mode: ConstraintMode,
}

impl Constraint {
    pub fn new(constrainer: Point, mode: ConstraintMode) -> Self {
        Self { constrainer, mode }
    }

    pub fn apply(&self, target: Point) -> Point {
        compute_constrainer(target, self.constrainer, self.mode)
    }
}
