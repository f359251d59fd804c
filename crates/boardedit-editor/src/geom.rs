//! 2D geometry helpers shared by the reconstruction routines.
//!
//! Floating point work happens on `nalgebra::Vector2<f64>`; predicates that
//! decide topology (orientation, segment crossing) use exact integer math.

use boardedit_core::{GeometryError, Point};
use nalgebra::Vector2;
use std::f64::consts::{PI, TAU};

pub type Vec2 = Vector2<f64>;

/// Sweeps smaller than this (radians) count as an empty arc.
pub const MIN_SWEEP: f64 = 1e-9;

/// Counter-clockwise perpendicular.
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// 2D cross product (z component).
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn angle_of(v: Vec2) -> f64 {
    v.y.atan2(v.x)
}

/// Wraps an angle into `[0, 2π)`.
pub fn wrap_positive(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Rotates `v` by `angle` radians counter-clockwise.
pub fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Projects `p` onto the infinite line through `origin` with direction `dir`.
pub fn project_onto_line(p: Vec2, origin: Vec2, dir: Vec2) -> Option<Vec2> {
    let len2 = dir.norm_squared();
    if len2 <= f64::EPSILON {
        return None;
    }
    let t = (p - origin).dot(&dir) / len2;
    Some(origin + dir * t)
}

/// Nearest point to `p` on the closed segment `a`-`b`.
pub fn nearest_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= f64::EPSILON {
        return a;
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    a + ab * t
}

/// Center of the circle through three points, `None` when collinear.
pub fn circumcenter(a: Vec2, b: Vec2, c: Vec2) -> Option<Vec2> {
    // Work relative to `a` to keep magnitudes small.
    let b = b - a;
    let c = c - a;
    let d = 2.0 * cross(b, c);
    if d.abs() <= f64::EPSILON * b.norm_squared().max(c.norm_squared()).max(1.0) {
        return None;
    }
    let b2 = b.norm_squared();
    let c2 = c.norm_squared();
    let ux = (c.y * b2 - b.y * c2) / d;
    let uy = (b.x * c2 - c.x * b2) / d;
    let center = a + Vec2::new(ux, uy);
    if center.x.is_finite() && center.y.is_finite() {
        Some(center)
    } else {
        None
    }
}

/// Signed sweep from `start` to `end` around `center`.
///
/// Positive sweeps run counter-clockwise (increasing angle); the result lies
/// in `(0, 2π)` or `(-2π, 0)` and errors when the arc would be empty.
pub fn signed_sweep(center: Vec2, start: Vec2, end: Vec2, ccw: bool) -> Result<f64, GeometryError> {
    let a_s = angle_of(start - center);
    let a_e = angle_of(end - center);
    let sweep = if ccw {
        wrap_positive(a_e - a_s)
    } else {
        -wrap_positive(a_s - a_e)
    };
    if sweep.abs() < MIN_SWEEP || (TAU - sweep.abs()) < MIN_SWEEP {
        return Err(GeometryError::DegenerateSweep);
    }
    Ok(sweep)
}

/// Point halfway along the arc from `start` to `end`.
pub fn arc_midpoint(center: Vec2, start: Vec2, end: Vec2, ccw: bool) -> Result<Vec2, GeometryError> {
    let sweep = signed_sweep(center, start, end, ccw)?;
    let radius = (start - center).norm();
    let angle = angle_of(start - center) + sweep / 2.0;
    Ok(center + Vec2::new(angle.cos(), angle.sin()) * radius)
}

/// Exact orientation of the triangle `a`, `b`, `c`: positive when
/// counter-clockwise, zero when collinear.
pub fn orient(a: Point, b: Point, c: Point) -> i64 {
    let abx = b.x as i64 - a.x as i64;
    let aby = b.y as i64 - a.y as i64;
    let acx = c.x as i64 - a.x as i64;
    let acy = c.y as i64 - a.y as i64;
    // Differences reach 2^32, so the products need i128.
    (abx as i128 * acy as i128 - aby as i128 * acx as i128).signum() as i64
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Whether the closed segments `a1`-`a2` and `b1`-`b2` share any point.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = orient(b1, b2, a1);
    let d2 = orient(b1, b2, a2);
    let d3 = orient(a1, a2, b1);
    let d4 = orient(a1, a2, b2);

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }

    (d1 == 0 && on_segment(b1, b2, a1))
        || (d2 == 0 && on_segment(b1, b2, a2))
        || (d3 == 0 && on_segment(a1, a2, b1))
        || (d4 == 0 && on_segment(a1, a2, b2))
}

/// Normalizes an angle difference into `(-π, π]`.
pub fn wrap_signed(angle: f64) -> f64 {
    let a = wrap_positive(angle);
    if a > PI {
        a - TAU
    } else {
        a
    }
}
