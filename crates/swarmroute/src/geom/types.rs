//! Basic scene types: points, the rectangular boundary, circular obstacles.

use nalgebra::Vector2;

/// 2D point / position.
pub type Point = Vector2<f64>;

/// Ordered point sequence from an agent to a target (≥2 points when built
/// by the router).
pub type Polyline = Vec<Point>;

/// Axis-aligned rectangular boundary.
///
/// Invariant (enforced by the validator, not the constructor):
/// `max.x > min.x` and `max.y > min.y`, strictly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Closed containment (edge counts as inside). Used for path checks.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Strict containment (edge rejected). Used for input validation so
    /// agents and targets never start on the fence.
    #[inline]
    pub fn contains_strict(&self, p: Point) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    /// Corners in CCW order starting at `min`.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// Perimeter edges in CCW order, matching `corners`.
    #[inline]
    pub fn edges(&self) -> [(Point, Point); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }
}

/// Circular keepout region. The *effective* keepout during detour
/// construction is `radius` plus a growing buffer (see `route::KeepoutSchedule`);
/// all base predicates here use `radius` alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    pub center: Point,
    pub radius: f64,
}

impl Obstacle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Closed disc membership (rim counts as inside).
    #[inline]
    pub fn covers(&self, p: Point) -> bool {
        (p - self.center).norm() <= self.radius
    }
}
