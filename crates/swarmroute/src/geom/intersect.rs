//! Distance and intersection predicates for segments, circles, polylines.

use super::types::{Bounds, Point};

/// Distance from `p` to the closed segment `a`–`b`.
pub fn dist_point_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Does the segment `a`–`b` touch or enter the disc of `radius` at `center`?
#[inline]
pub fn segment_circle_intersects(a: Point, b: Point, center: Point, radius: f64) -> bool {
    dist_point_segment(center, a, b) <= radius
}

/// Parameter interval `[t0, t1] ⊆ [0, 1]` along `a`–`b` that lies strictly
/// inside the open disc, or `None` if the segment stays outside.
///
/// Used by the validator to measure how a disc covers the boundary perimeter.
pub fn segment_circle_interval(a: Point, b: Point, center: Point, radius: f64) -> Option<(f64, f64)> {
    let d = b - a;
    let f = a - center;
    let qa = d.norm_squared();
    if qa <= 0.0 {
        return None;
    }
    let qb = 2.0 * f.dot(&d);
    let qc = f.norm_squared() - radius * radius;
    let disc = qb * qb - 4.0 * qa * qc;
    if disc <= 0.0 {
        return None; // misses or grazes in a single point
    }
    let sq = disc.sqrt();
    let t0 = ((-qb - sq) / (2.0 * qa)).max(0.0);
    let t1 = ((-qb + sq) / (2.0 * qa)).min(1.0);
    if t0 >= t1 {
        return None;
    }
    Some((t0, t1))
}

#[inline]
fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[inline]
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Segment–segment intersection; touching endpoints and collinear overlap
/// both count as intersecting.
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }
    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}

/// Do two polylines intersect anywhere (touching counts)?
pub fn polylines_intersect(a: &[Point], b: &[Point]) -> bool {
    for wa in a.windows(2) {
        for wb in b.windows(2) {
            if segments_intersect(wa[0], wa[1], wb[0], wb[1]) {
                return true;
            }
        }
    }
    false
}

/// Sum of Euclidean segment lengths.
pub fn polyline_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Every vertex inside the boundary (closed containment).
///
/// Segment interiors cannot leave an axis-aligned rect when both endpoints
/// are inside, so a vertex check suffices.
#[inline]
pub fn polyline_in_bounds(path: &[Point], bounds: &Bounds) -> bool {
    path.iter().all(|&p| bounds.contains(p))
}
