//! Point-cloud builders for buffered shapes.
//!
//! The router never materializes buffered polygons as areas; it only needs
//! their vertices as input to `convex_hull`. So a circle becomes `n` rim
//! points and a stroked segment becomes two offset sides plus round caps.

use super::types::Point;

/// `n` evenly spaced points on the circle rim, starting at angle 0.
pub fn circle_points(center: Point, radius: f64, n: usize) -> Vec<Point> {
    let n = n.max(3);
    (0..n)
        .map(|k| {
            let th = 2.0 * std::f64::consts::PI * (k as f64) / (n as f64);
            center + Point::new(th.cos(), th.sin()) * radius
        })
        .collect()
}

/// Vertices of the segment `a`–`b` stroked to `half_width`: the two offset
/// side lines plus a semicircular cap of `n/2` points at each end.
///
/// Degenerates to a plain circle when `a == b`.
pub fn stroke_segment(a: Point, b: Point, half_width: f64, n: usize) -> Vec<Point> {
    let d = b - a;
    let len = d.norm();
    if len <= 0.0 {
        return circle_points(a, half_width, n);
    }
    let dir = d / len;
    let normal = Point::new(-dir.y, dir.x);
    let cap = (n / 2).max(2);

    let mut out = Vec::with_capacity(2 * cap + 6);
    out.push(a + normal * half_width);
    out.push(b + normal * half_width);
    // cap around b, sweeping from +normal to -normal away from a
    let phase = normal.y.atan2(normal.x);
    for k in 1..cap {
        let th = phase - std::f64::consts::PI * (k as f64) / (cap as f64);
        out.push(b + Point::new(th.cos(), th.sin()) * half_width);
    }
    out.push(b - normal * half_width);
    out.push(a - normal * half_width);
    // cap around a, sweeping from -normal back to +normal away from b
    for k in 1..cap {
        let th = phase - std::f64::consts::PI - std::f64::consts::PI * (k as f64) / (cap as f64);
        out.push(a + Point::new(th.cos(), th.sin()) * half_width);
    }
    out
}
