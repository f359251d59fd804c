//! Safe coordinate domain.
//!
//! Every coordinate the editor produces is kept `padding` units away from the
//! edges of the `i32` range so downstream arithmetic (bounding boxes, offsets,
//! DRC clearances) cannot overflow.

use crate::point::Point;
use nalgebra::Vector2;

/// Default padding from the coordinate limits: 20 mm in nanometres.
pub const COORDS_PADDING: i32 = 20_000_000;

/// Inclusive `(min, max)` bounds for a coordinate with the given padding.
pub fn safe_bounds(padding: i32) -> (i64, i64) {
    let padding = padding.max(0) as i64;
    (i32::MIN as i64 + padding, i32::MAX as i64 - padding)
}

fn clamp_coord(value: i64, padding: i32) -> i32 {
    let (min, max) = safe_bounds(padding);
    value.clamp(min, max) as i32
}

/// Clamps a point into the safe domain.
pub fn clamp_point(p: Point, padding: i32) -> Point {
    Point::new(
        clamp_coord(p.x as i64, padding),
        clamp_coord(p.y as i64, padding),
    )
}

/// Rounds and clamps a floating point vector into the safe domain.
///
/// Returns `None` when the vector is not finite.
pub fn clamp_vector(v: Vector2<f64>, padding: i32) -> Option<Point> {
    if !v.x.is_finite() || !v.y.is_finite() {
        return None;
    }
    let (min, max) = safe_bounds(padding);
    let x = v.x.round().clamp(min as f64, max as f64) as i64;
    let y = v.y.round().clamp(min as f64, max as f64) as i64;
    Some(Point::new(x as i32, y as i32))
}

/// Whether a floating point vector lies inside the safe domain.
pub fn in_safe_range(v: Vector2<f64>, padding: i32) -> bool {
    let (min, max) = safe_bounds(padding);
    let range = min as f64..=max as f64;
    v.x.is_finite() && v.y.is_finite() && range.contains(&v.x) && range.contains(&v.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_point_respects_padding() {
        let p = clamp_point(Point::new(i32::MAX, i32::MIN), COORDS_PADDING);
        assert_eq!(p.x, i32::MAX - COORDS_PADDING);
        assert_eq!(p.y, i32::MIN + COORDS_PADDING);
    }

    #[test]
    fn test_clamp_point_keeps_inner_values() {
        let p = Point::new(1_000, -1_000);
        assert_eq!(clamp_point(p, COORDS_PADDING), p);
    }

    #[test]
    fn test_clamp_vector() {
        assert_eq!(clamp_vector(Vector2::new(f64::INFINITY, 0.0), 0), None);
        let p = clamp_vector(Vector2::new(1e15, -1e15), COORDS_PADDING).unwrap();
        assert_eq!(p, Point::new(i32::MAX - COORDS_PADDING, i32::MIN + COORDS_PADDING));
    }

    #[test]
    fn test_in_safe_range() {
        assert!(in_safe_range(Vector2::new(0.0, 0.0), COORDS_PADDING));
        assert!(!in_safe_range(Vector2::new(i32::MAX as f64, 0.0), COORDS_PADDING));
        assert!(!in_safe_range(Vector2::new(f64::NAN, 0.0), COORDS_PADDING));
    }

    #[test]
    fn test_negative_padding_treated_as_zero() {
        assert_eq!(safe_bounds(-5), (i32::MIN as i64, i32::MAX as i64));
    }
}
