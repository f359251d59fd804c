//! Integer board coordinates.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the board in internal units (nanometres).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Squared distance. Exact unless both axes span most of the `i32`
    /// range, where it saturates at `u64::MAX`.
    pub fn distance_squared(&self, other: &Point) -> u64 {
        let dx = self.x.abs_diff(other.x) as u64;
        let dy = self.y.abs_diff(other.y) as u64;
        (dx * dx).saturating_add(dy * dy)
    }

    /// Midpoint of the segment to `other`, rounded toward negative infinity.
    pub fn midpoint(&self, other: &Point) -> Point {
        let x = (self.x as i64 + other.x as i64).div_euclid(2);
        let y = (self.y as i64 + other.y as i64).div_euclid(2);
        Point::new(x as i32, y as i32)
    }

    /// Offsets the point, saturating at the `i32` range.
    pub fn translated(&self, dx: i64, dy: i64) -> Point {
        let x = (self.x as i64 + dx).clamp(i32::MIN as i64, i32::MAX as i64);
        let y = (self.y as i64 + dy).clamp(i32::MIN as i64, i32::MAX as i64);
        Point::new(x as i32, y as i32)
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }

    /// Rounds a floating point vector back onto the integer grid.
    ///
    /// Returns `None` for non-finite input or values outside `i32`.
    pub fn from_vector(v: Vector2<f64>) -> Option<Point> {
        if !v.x.is_finite() || !v.y.is_finite() {
            return None;
        }
        let x = v.x.round();
        let y = v.y.round();
        let range = i32::MIN as f64..=i32::MAX as f64;
        if !range.contains(&x) || !range.contains(&y) {
            return None;
        }
        Some(Point::new(x as i32, y as i32))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
