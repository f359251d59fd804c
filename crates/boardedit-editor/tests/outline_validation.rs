//! Outline building and validation.

use boardedit_editor::{
    is_valid_outline, validate_outline, OutlineError, Point, PointRole, PointSet, PolygonOutline, Shape,
};
use proptest::prelude::*;

fn contour(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&p| Point::from(p)).collect()
}

#[test]
fn test_concave_with_holes_is_valid() {
    let outline = PolygonOutline::new(contour(&[(0, 0), (100, 0), (100, 100), (50, 40), (0, 100)]))
        .with_hole(contour(&[(10, 10), (30, 10), (30, 30), (10, 30)]))
        .with_hole(contour(&[(60, 10), (90, 10), (75, 30)]));
    assert!(is_valid_outline(&outline));
}

#[test]
fn test_holes_touching_each_other_are_rejected() {
    let outline = PolygonOutline::new(contour(&[(0, 0), (100, 0), (100, 100), (0, 100)]))
        .with_hole(contour(&[(10, 10), (30, 10), (30, 30)]))
        .with_hole(contour(&[(30, 30), (50, 30), (50, 50)]));
    assert_eq!(
        validate_outline(&outline),
        Err(OutlineError::ContourCrossing { first: 1, second: 2 })
    );
}

#[test]
fn test_error_messages_are_readable() {
    let err = OutlineError::SelfIntersection { contour: 0 };
    assert_eq!(err.to_string(), "Contour 0 intersects itself");
}

#[test]
fn test_builder_maps_handles_back_to_contours() {
    let outline = PolygonOutline::new(contour(&[(0, 0), (100, 0), (100, 100), (0, 100)]))
        .with_hole(contour(&[(10, 10), (30, 10), (30, 30)]));
    let shape = Shape::Outline(outline.clone());
    let points = PointSet::build(&shape);

    for (contour_index, pts) in outline.contours.iter().enumerate() {
        for (vertex, p) in pts.iter().enumerate() {
            let index = points.index_of_vertex(contour_index, vertex).expect("vertex handle");
            assert_eq!(points.locate(index), Some((contour_index, vertex)));
            assert_eq!(points.position(index), Some(*p));
        }
    }

    let midpoints = points.iter().filter(|p| matches!(p.role, PointRole::Midpoint { .. })).count();
    assert_eq!(midpoints, 7);
}

/// Star-shaped polygon: vertices at increasing angles are always simple.
fn star_polygon() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(1_000.0f64..100_000.0, 3..12).prop_map(|radii| {
        let n = radii.len();
        radii
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let a = std::f64::consts::TAU * i as f64 / n as f64;
                Point::new((r * a.cos()).round() as i32, (r * a.sin()).round() as i32)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn star_polygons_are_valid(pts in star_polygon()) {
        prop_assert!(is_valid_outline(&PolygonOutline::new(pts)));
    }

    #[test]
    fn bow_tie_is_rejected(offset in 1i32..1_000) {
        // (0,0) (s,s) (s,0) (0,s) always crosses itself
        let s = 1_000 + offset;
        let outline = PolygonOutline::new(vec![
            Point::new(0, 0),
            Point::new(s, s),
            Point::new(s, 0),
            Point::new(0, s),
        ]);
        prop_assert_eq!(validate_outline(&outline), Err(OutlineError::SelfIntersection { contour: 0 }));
    }

    #[test]
    fn build_then_apply_is_identity(pts in star_polygon()) {
        let shape = Shape::Outline(PolygonOutline::new(pts));
        prop_assert_eq!(PointSet::build(&shape).apply_to(&shape), shape);
    }
}
