use crate::geom::{self, Vec2};
use boardedit_core::{GeometryError, Point};
use serde::{Deserialize, Serialize};

/// A circular arc running from `start` through `mid` to `end`.
///
/// `center` is stored alongside the three points so that "keep center"
/// edits stay bit-exact instead of being re-derived from rounded points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arc {
    pub start: Point,
    pub mid: Point,
    pub end: Point,
    pub center: Point,
}

impl Arc {
    pub fn new(start: Point, mid: Point, end: Point, center: Point) -> Self {
        Self {
            start,
            mid,
            end,
            center,
        }
    }

    /// Builds the arc through three points, deriving the center.
    pub fn from_three_points(start: Point, mid: Point, end: Point) -> Result<Self, GeometryError> {
        if start == end {
            return Err(GeometryError::CoincidentPoints {
                what: "arc start and end",
            });
        }
        let center = geom::circumcenter(start.to_vector(), mid.to_vector(), end.to_vector())
            .ok_or(GeometryError::Collinear)?;
        let center = Point::from_vector(center).ok_or(GeometryError::OutOfRange)?;
        Ok(Self::new(start, mid, end, center))
    }

    /// Distance from the center to the start point.
    pub fn radius(&self) -> f64 {
        self.center.distance_to(&self.start)
    }

    /// Whether the arc runs counter-clockwise (increasing angle) from start
    /// to end. Derived exactly from the three on-arc points.
    pub fn is_ccw(&self) -> bool {
        geom::orient(self.start, self.mid, self.end) > 0
    }

    /// Signed angle swept from start to end, in radians.
    pub fn sweep(&self) -> Result<f64, GeometryError> {
        geom::signed_sweep(
            self.center.to_vector(),
            self.start.to_vector(),
            self.end.to_vector(),
            self.is_ccw(),
        )
    }

    /// Unit tangent at `start`, pointing along the direction of travel.
    pub fn start_tangent(&self) -> Option<Vec2> {
        self.tangent_at(self.start, self.is_ccw())
    }

    /// Unit tangent at `end`, pointing back into the arc.
    pub fn end_tangent(&self) -> Option<Vec2> {
        self.tangent_at(self.end, !self.is_ccw())
    }

    fn tangent_at(&self, p: Point, ccw: bool) -> Option<Vec2> {
        let radial = p.to_vector() - self.center.to_vector();
        let len = radial.norm();
        if len <= f64::EPSILON {
            return None;
        }
        let t = geom::perp(radial / len);
        Some(if ccw { t } else { -t })
    }

    pub fn translate(&mut self, dx: i64, dy: i64) {
        self.start = self.start.translated(dx, dy);
        self.mid = self.mid.translated(dx, dy);
        self.end = self.end.translated(dx, dy);
        self.center = self.center.translated(dx, dy);
    }
}
