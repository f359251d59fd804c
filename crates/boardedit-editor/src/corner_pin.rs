//! Keeps a rectangle a rectangle while one corner is dragged.

use crate::model::{Hole, RectCorner};
use boardedit_core::{safe_bounds, Point, COORDS_PADDING};
use boardedit_settings::EditorSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinLimits {
    /// Smallest allowed width and height.
    pub min_size: i32,
    /// Margin kept between the hole and the rectangle edges.
    pub hole_clearance: i32,
    pub coords_padding: i32,
}

impl Default for PinLimits {
    fn default() -> Self {
        Self::from(&EditorSettings::default())
    }
}

impl From<&EditorSettings> for PinLimits {
    fn from(settings: &EditorSettings) -> Self {
        Self {
            min_size: settings.min_rect_size,
            hole_clearance: settings.hole_clearance,
            coords_padding: settings.coords_padding,
        }
    }
}

impl PinLimits {
    pub fn new(min_size: i32, hole_clearance: i32) -> Self {
        Self {
            min_size,
            hole_clearance,
            coords_padding: COORDS_PADDING,
        }
    }
}

/// Rebuilds the four corners `[TL, TR, BR, BL]` after `edited` was moved.
///
/// The opposite corner stays where it is and the two adjacent corners follow.
/// The moved coordinate is clamped, per axis, so the rectangle keeps at
/// least `min_size` in both directions and, when there is a hole, encloses
/// it with `hole_clearance` to spare. The stricter bound wins.
pub fn pin_edited_corner(
    corners: [Point; 4],
    edited: RectCorner,
    hole: Option<&Hole>,
    limits: &PinLimits,
) -> [Point; 4] {
    let moved = corners[edited.index()];
    let anchor = corners[edited.opposite().index()];
    let min_size = limits.min_size.max(0) as i64;
    let clearance = limits.hole_clearance.max(0) as i64;

    let x = if edited.is_left() {
        let mut bound = anchor.x as i64 - min_size;
        if let Some(hole) = hole {
            bound = bound.min(hole.min.x as i64 - clearance);
        }
        (moved.x as i64).min(bound)
    } else {
        let mut bound = anchor.x as i64 + min_size;
        if let Some(hole) = hole {
            bound = bound.max(hole.max.x as i64 + clearance);
        }
        (moved.x as i64).max(bound)
    };

    let y = if edited.is_top() {
        let mut bound = anchor.y as i64 - min_size;
        if let Some(hole) = hole {
            bound = bound.min(hole.min.y as i64 - clearance);
        }
        (moved.y as i64).min(bound)
    } else {
        let mut bound = anchor.y as i64 + min_size;
        if let Some(hole) = hole {
            bound = bound.max(hole.max.y as i64 + clearance);
        }
        (moved.y as i64).max(bound)
    };

    let (lo, hi) = safe_bounds(limits.coords_padding);
    let x = x.clamp(lo, hi) as i32;
    let y = y.clamp(lo, hi) as i32;

    let (left, right) = if edited.is_left() { (x, anchor.x) } else { (anchor.x, x) };
    let (top, bottom) = if edited.is_top() { (y, anchor.y) } else { (anchor.y, y) };

    [
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> [Point; 4] {
        [
            Point::new(0, 0),
            Point::new(100, 0),
            Point::new(100, 50),
            Point::new(0, 50),
        ]
    }

    fn drag(corner: RectCorner, to: Point) -> [Point; 4] {
        let mut corners = rect();
        corners[corner.index()] = to;
        corners
    }

    #[test]
    fn test_free_drag_moves_adjacent_corners() {
        let limits = PinLimits::new(10, 5);
        let out = pin_edited_corner(drag(RectCorner::TopRight, Point::new(120, -10)), RectCorner::TopRight, None, &limits);
        assert_eq!(
            out,
            [
                Point::new(0, -10),
                Point::new(120, -10),
                Point::new(120, 50),
                Point::new(0, 50)
            ]
        );
    }

    #[test]
    fn test_min_size_past_opposite_corner() {
        let limits = PinLimits::new(10, 5);
        let out = pin_edited_corner(drag(RectCorner::BottomRight, Point::new(-40, -40)), RectCorner::BottomRight, None, &limits);
        assert_eq!(out[2], Point::new(10, 10));
        assert_eq!(out[0], Point::new(0, 0));
    }

    #[test]
    fn test_hole_clearance() {
        let hole = Hole::from_corners(Point::new(40, 15), Point::new(60, 35));
        let limits = PinLimits::new(10, 5);
        let out = pin_edited_corner(
            drag(RectCorner::BottomRight, Point::new(45, 20)),
            RectCorner::BottomRight,
            Some(&hole),
            &limits,
        );
        assert_eq!(out[2], Point::new(65, 40));
        assert_eq!(out[0], Point::new(0, 0));
    }

    #[test]
    fn test_stricter_bound_wins() {
        // the hole margin is the stricter bound on both axes
        let hole = Hole::from_corners(Point::new(2, 2), Point::new(4, 4));
        let limits = PinLimits::new(30, 1);
        let out = pin_edited_corner(
            drag(RectCorner::TopLeft, Point::new(90, 45)),
            RectCorner::TopLeft,
            Some(&hole),
            &limits,
        );
        assert_eq!(out[0], Point::new(1, 1));

        // only on x once the minimum size grows
        let limits = PinLimits::new(99, 1);
        let out = pin_edited_corner(
            drag(RectCorner::TopLeft, Point::new(90, 45)),
            RectCorner::TopLeft,
            Some(&hole),
            &limits,
        );
        assert_eq!(out[0], Point::new(1, -49));
    }
}
