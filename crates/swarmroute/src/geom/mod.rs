//! 2D geometry kernel glue for route planning.
//!
//! Purpose
//! - Provide the small set of primitives the router and resolver need:
//!   distances, segment/circle and polyline intersection, stroking,
//!   circle approximation, and a convex hull. All on `nalgebra::Vector2`.
//! - Keep the API minimal and numerically explicit (eps-aware where it
//!   matters, exact orientation tests where it does not).
//!
//! Why hand-rolled
//! - The router only ever takes the hull of a point cloud, so no polygon
//!   boolean ops are needed; the hull of "stroked segment ∪ buffered
//!   circles" equals the hull of their combined vertices.

mod buffer;
mod hull;
mod intersect;
mod types;

pub use buffer::{circle_points, stroke_segment};
pub use hull::convex_hull;
pub use intersect::{
    dist_point_segment, polyline_in_bounds, polyline_length, polylines_intersect,
    segment_circle_intersects, segment_circle_interval, segments_intersect,
};
pub use types::{Bounds, Obstacle, Point, Polyline};

#[cfg(test)]
mod tests;
