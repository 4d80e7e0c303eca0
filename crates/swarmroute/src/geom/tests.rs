use super::*;
use proptest::prelude::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn bounds_containment_closed_vs_strict() {
    let b = Bounds::new(pt(0.0, 0.0), pt(10.0, 10.0));
    assert!(b.contains(pt(0.0, 0.0)));
    assert!(!b.contains_strict(pt(0.0, 0.0)));
    assert!(b.contains_strict(pt(5.0, 5.0)));
    assert!(!b.contains(pt(10.0, 10.000001)));
    assert_eq!(b.width(), 10.0);
    assert_eq!(b.height(), 10.0);
}

#[test]
fn obstacle_covers_rim() {
    let o = Obstacle::new(pt(5.0, 5.0), 1.0);
    assert!(o.covers(pt(5.0, 6.0))); // rim counts
    assert!(o.covers(pt(5.5, 5.0)));
    assert!(!o.covers(pt(5.0, 6.001)));
}

#[test]
fn point_segment_distance_cases() {
    // Perpendicular foot inside the segment.
    assert!((dist_point_segment(pt(5.0, 5.0), pt(0.0, 0.0), pt(10.0, 0.0)) - 5.0).abs() < 1e-12);
    // Foot beyond the end: distance to the endpoint.
    let d = dist_point_segment(pt(12.0, 1.0), pt(0.0, 0.0), pt(10.0, 0.0));
    assert!((d - 5f64.sqrt()).abs() < 1e-12);
    // Degenerate segment.
    assert!((dist_point_segment(pt(3.0, 4.0), pt(0.0, 0.0), pt(0.0, 0.0)) - 5.0).abs() < 1e-12);
}

#[test]
fn segment_circle_hit_and_miss() {
    let c = pt(5.0, 5.0);
    assert!(segment_circle_intersects(pt(0.0, 5.0), pt(10.0, 5.0), c, 1.0));
    assert!(!segment_circle_intersects(pt(0.0, 0.0), pt(10.0, 0.0), c, 1.0));
    // Tangent counts as a hit.
    assert!(segment_circle_intersects(pt(0.0, 4.0), pt(10.0, 4.0), c, 1.0));
    // The spec example pair: min distance sqrt(5) ≈ 2.236 to the center.
    assert!(!segment_circle_intersects(pt(4.0, 7.0), pt(8.0, 9.0), c, 2.0));
    assert!(segment_circle_intersects(pt(4.0, 7.0), pt(8.0, 9.0), c, 2.3));
}

#[test]
fn segment_circle_interval_is_open() {
    let c = pt(5.0, 0.0);
    // Chord through the middle.
    let (t0, t1) = segment_circle_interval(pt(0.0, 0.0), pt(10.0, 0.0), c, 1.0).unwrap();
    assert!((t0 - 0.4).abs() < 1e-12 && (t1 - 0.6).abs() < 1e-12);
    // Tangent line grazes in one point: no interval.
    assert!(segment_circle_interval(pt(0.0, 1.0), pt(10.0, 1.0), c, 1.0).is_none());
    // Entirely outside.
    assert!(segment_circle_interval(pt(0.0, 3.0), pt(10.0, 3.0), c, 1.0).is_none());
}

#[test]
fn segments_cross_touch_and_miss() {
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(10.0, 10.0),
        pt(0.0, 10.0),
        pt(10.0, 0.0)
    ));
    // Shared endpoint counts.
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(5.0, 5.0),
        pt(5.0, 5.0),
        pt(9.0, 0.0)
    ));
    // T-touch counts.
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(10.0, 0.0),
        pt(5.0, 0.0),
        pt(5.0, 5.0)
    ));
    // Collinear overlap counts.
    assert!(segments_intersect(
        pt(0.0, 0.0),
        pt(6.0, 0.0),
        pt(4.0, 0.0),
        pt(9.0, 0.0)
    ));
    // Parallel, offset: miss.
    assert!(!segments_intersect(
        pt(0.0, 0.0),
        pt(10.0, 0.0),
        pt(0.0, 1.0),
        pt(10.0, 1.0)
    ));
    // Collinear, disjoint: miss.
    assert!(!segments_intersect(
        pt(0.0, 0.0),
        pt(2.0, 0.0),
        pt(3.0, 0.0),
        pt(5.0, 0.0)
    ));
}

#[test]
fn polyline_predicates() {
    let a = vec![pt(0.0, 0.0), pt(5.0, 5.0), pt(10.0, 0.0)];
    let b = vec![pt(0.0, 4.0), pt(10.0, 4.0)];
    let c = vec![pt(0.0, 6.0), pt(10.0, 6.0)];
    assert!(polylines_intersect(&a, &b));
    assert!(!polylines_intersect(&a, &c));
    assert!((polyline_length(&a) - 2.0 * 50f64.sqrt()).abs() < 1e-12);
    let bounds = Bounds::new(pt(0.0, 0.0), pt(10.0, 10.0));
    assert!(polyline_in_bounds(&a, &bounds));
    assert!(!polyline_in_bounds(&[pt(1.0, 1.0), pt(11.0, 1.0)], &bounds));
}

#[test]
fn circle_points_lie_on_rim() {
    let c = pt(2.0, 3.0);
    let pts = circle_points(c, 1.5, 16);
    assert_eq!(pts.len(), 16);
    for p in &pts {
        assert!(((p - c).norm() - 1.5).abs() < 1e-12);
    }
}

#[test]
fn stroke_points_at_half_width() {
    let a = pt(1.0, 1.0);
    let b = pt(7.0, 5.0);
    let pts = stroke_segment(a, b, 0.1, 16);
    for &p in &pts {
        let d = dist_point_segment(p, a, b);
        assert!((d - 0.1).abs() < 1e-9, "stroke vertex off the offset curve");
    }
    // Degenerate stroke is a circle.
    let pts = stroke_segment(a, a, 0.1, 16);
    for &p in &pts {
        assert!(((p - a).norm() - 0.1).abs() < 1e-12);
    }
}

#[test]
fn hull_of_square_with_interior_point() {
    let hull = convex_hull(&[
        pt(0.0, 0.0),
        pt(1.0, 0.0),
        pt(1.0, 1.0),
        pt(0.0, 1.0),
        pt(0.5, 0.5),
    ])
    .unwrap();
    assert_eq!(hull.len(), 4);
    assert!(!hull.iter().any(|&p| p == pt(0.5, 0.5)));
}

#[test]
fn hull_rejects_degenerate_input() {
    assert!(convex_hull(&[pt(0.0, 0.0), pt(1.0, 1.0)]).is_none());
    assert!(convex_hull(&[pt(0.0, 0.0), pt(0.0, 0.0), pt(0.0, 0.0)]).is_none());
}

proptest! {
    #[test]
    fn segment_intersection_is_symmetric(
        ax in -10.0..10.0f64, ay in -10.0..10.0f64,
        bx in -10.0..10.0f64, by in -10.0..10.0f64,
        cx in -10.0..10.0f64, cy in -10.0..10.0f64,
        dx in -10.0..10.0f64, dy in -10.0..10.0f64,
    ) {
        let (a, b, c, d) = (pt(ax, ay), pt(bx, by), pt(cx, cy), pt(dx, dy));
        prop_assert_eq!(
            segments_intersect(a, b, c, d),
            segments_intersect(c, d, a, b)
        );
    }

    #[test]
    fn hull_contains_every_input_point(
        pts in prop::collection::vec((-10.0..10.0f64, -10.0..10.0f64), 3..40)
    ) {
        let cloud: Vec<Point> = pts.iter().map(|&(x, y)| pt(x, y)).collect();
        if let Some(hull) = convex_hull(&cloud) {
            // Every input point is inside or on the hull: never strictly
            // right of any CCW edge.
            for &p in &cloud {
                for k in 0..hull.len() {
                    let a = hull[k];
                    let b = hull[(k + 1) % hull.len()];
                    let e = b - a;
                    let v = p - a;
                    prop_assert!(e.x * v.y - e.y * v.x >= -1e-9);
                }
            }
        }
    }

    #[test]
    fn point_segment_distance_is_nonnegative_and_bounded(
        px in -10.0..10.0f64, py in -10.0..10.0f64,
        ax in -10.0..10.0f64, ay in -10.0..10.0f64,
        bx in -10.0..10.0f64, by in -10.0..10.0f64,
    ) {
        let (p, a, b) = (pt(px, py), pt(ax, ay), pt(bx, by));
        let d = dist_point_segment(p, a, b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= (p - a).norm() + 1e-12);
        prop_assert!(d <= (p - b).norm() + 1e-12);
    }
}
