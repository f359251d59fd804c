//! Rectangle corner drags.

use boardedit_editor::{pin_edited_corner, Hole, PinLimits, Point, RectCorner, RectPad};
use proptest::prelude::*;

fn dragged(pad: &RectPad, corner: RectCorner, to: Point) -> [Point; 4] {
    let mut corners = pad.corners();
    corners[corner.index()] = to;
    corners
}

#[test]
fn test_rect_with_hole_scenario() {
    // rectangle (0,0)-(100,50), hole (40,15)-(60,35)
    let hole = Hole::from_corners(Point::new(40, 15), Point::new(60, 35));
    let pad = RectPad::new(Point::new(0, 0), Point::new(100, 50)).with_hole(hole);
    let limits = PinLimits::new(10, 4);

    let corners = pin_edited_corner(
        dragged(&pad, RectCorner::BottomRight, Point::new(45, 20)),
        RectCorner::BottomRight,
        pad.hole.as_ref(),
        &limits,
    );

    let mut result = pad;
    result.set_corners(&corners);

    // opposite corner never moves
    assert_eq!(result.top_left, Point::new(0, 0));
    // clamped, not reverted to (100, 50)
    assert_eq!(result.bottom_right, Point::new(64, 39));
    assert!(result.bottom_right.x as i64 - hole.max.x as i64 >= 4);
    assert!(result.bottom_right.y as i64 - hole.max.y as i64 >= 4);
}

#[test]
fn test_every_corner_keeps_rectangle() {
    let pad = RectPad::new(Point::new(-50, -50), Point::new(50, 50));
    let limits = PinLimits::new(5, 0);
    for corner in RectCorner::ALL {
        let corners = pin_edited_corner(dragged(&pad, corner, Point::new(7, -3)), corner, None, &limits);
        // TL/TR share y, TR/BR share x, BR/BL share y, BL/TL share x
        assert_eq!(corners[0].y, corners[1].y);
        assert_eq!(corners[1].x, corners[2].x);
        assert_eq!(corners[2].y, corners[3].y);
        assert_eq!(corners[3].x, corners[0].x);
        assert_eq!(corners[corner.opposite().index()], pad.corner(corner.opposite()));
    }
}

proptest! {
    #[test]
    fn pinned_rect_never_below_min_size(
        x0 in -100_000i32..100_000,
        y0 in -100_000i32..100_000,
        w in 1_000i32..200_000,
        h in 1_000i32..200_000,
        to_x in -500_000i32..500_000,
        to_y in -500_000i32..500_000,
        corner_index in 0usize..4,
        min_size in 1i32..50_000,
    ) {
        let pad = RectPad::new(Point::new(x0, y0), Point::new(x0 + w, y0 + h));
        let corner = RectCorner::ALL[corner_index];
        let limits = PinLimits::new(min_size, 0);

        let corners = pin_edited_corner(dragged(&pad, corner, Point::new(to_x, to_y)), corner, None, &limits);
        let width = corners[1].x as i64 - corners[0].x as i64;
        let height = corners[3].y as i64 - corners[0].y as i64;
        prop_assert!(width >= min_size as i64, "width {} < {}", width, min_size);
        prop_assert!(height >= min_size as i64, "height {} < {}", height, min_size);
    }

    #[test]
    fn pinned_rect_keeps_hole_clearance(
        to_x in -500i32..500,
        to_y in -500i32..500,
        corner_index in 0usize..4,
    ) {
        let hole = Hole::from_corners(Point::new(-20, -10), Point::new(20, 10));
        let pad = RectPad::new(Point::new(-100, -100), Point::new(100, 100)).with_hole(hole);
        let corner = RectCorner::ALL[corner_index];
        let limits = PinLimits::new(10, 15);

        let corners = pin_edited_corner(dragged(&pad, corner, Point::new(to_x, to_y)), corner, Some(&hole), &limits);
        let (tl, br) = (corners[0], corners[2]);
        prop_assert!(tl.x <= hole.min.x - 15 && tl.y <= hole.min.y - 15);
        prop_assert!(br.x >= hole.max.x + 15 && br.y >= hole.max.y + 15);
    }
}
