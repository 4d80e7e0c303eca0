//! Path router: straight segment or hull-derived detour.
//!
//! Purpose
//! - Given start, end, and the obstacle set, return the straight segment
//!   whenever it is obstacle-free and in bounds (always the best bid), else
//!   wrap a detour around the offending obstacles.
//!
//! Detour construction
//! - Stroke the segment to a thin polygon, expand each intersecting obstacle
//!   by its base radius plus a growing keepout, and take the convex hull of
//!   the combined vertex cloud. The hull wraps tightly around segment and
//!   obstacles, so the arc of it between the vertices nearest to start and
//!   end is an obstacle-free route that stays close to the straight ideal.
//! - The keepout grows on every detour within one solve so successive
//!   reroutes around contested space fan out instead of stacking on the
//!   same line.

use crate::error::{Result, SolveError};
use crate::geom::{
    circle_points, convex_hull, polyline_in_bounds, segment_circle_intersects, stroke_segment,
    Bounds, Obstacle, Point, Polyline,
};

/// Router tunables.
#[derive(Clone, Copy, Debug)]
pub struct RouterCfg {
    /// Vertex count used to approximate circles and stroke caps.
    pub circle_points: usize,
    /// Half-width used to stroke the zero-width segment into an area.
    pub stroke_half_width: f64,
    /// First keepout buffer added on top of an obstacle's base radius.
    pub keepout_initial: f64,
    /// Keepout growth per successive detour construction.
    pub keepout_step: f64,
    /// Slack beyond the stroke half-width when dropping hull vertices that
    /// are stroking artifacts near the segment's own endpoints.
    pub endpoint_eps: f64,
}

impl Default for RouterCfg {
    fn default() -> Self {
        Self {
            circle_points: 16,
            stroke_half_width: 0.1,
            keepout_initial: 0.05,
            keepout_step: 0.05,
            endpoint_eps: 0.01,
        }
    }
}

/// Per-solve monotone keepout sequence: `initial`, `initial + step`, ...
///
/// Owned by the router instance and never shared across solves, so repeated
/// solves of the same scenario reproduce the same buffers.
#[derive(Clone, Copy, Debug)]
pub struct KeepoutSchedule {
    initial: f64,
    step: f64,
    drawn: u32,
}

impl KeepoutSchedule {
    #[inline]
    pub fn new(initial: f64, step: f64) -> Self {
        Self {
            initial,
            step,
            drawn: 0,
        }
    }

    /// Next buffer width; strictly increasing across calls.
    #[inline]
    pub fn draw(&mut self) -> f64 {
        let b = self.initial + self.step * f64::from(self.drawn);
        self.drawn += 1;
        b
    }
}

/// Routing strategy seam: the auction and the crossing resolver only depend
/// on this, so the hull heuristic can later be swapped for a visibility
/// graph or sampling planner without touching either.
pub trait RouteStrategy {
    fn route(
        &mut self,
        bounds: &Bounds,
        agent: Point,
        target: Point,
        obstacles: &[Obstacle],
    ) -> Result<Polyline>;
}

/// Hull-around-union router (the reference strategy).
#[derive(Clone, Debug)]
pub struct HullRouter {
    cfg: RouterCfg,
    keepout: KeepoutSchedule,
}

impl HullRouter {
    pub fn new(cfg: RouterCfg) -> Self {
        let keepout = KeepoutSchedule::new(cfg.keepout_initial, cfg.keepout_step);
        Self { cfg, keepout }
    }

    /// Build one detour candidate. `far_arc` selects the complementary
    /// (wrap-around) hull arc, the second orientation tried when the near
    /// arc leaves the boundary.
    fn detour(&mut self, agent: Point, target: Point, hit: &[Obstacle], far_arc: bool) -> Polyline {
        let n = self.cfg.circle_points;
        let mut cloud = stroke_segment(agent, target, self.cfg.stroke_half_width, n);
        for obs in hit {
            cloud.extend(circle_points(obs.center, obs.radius + self.keepout.draw(), n));
        }
        // Cannot fail: the cloud always holds a full stroke plus ≥1 circle.
        let hull = match convex_hull(&cloud) {
            Some(h) => h,
            None => return vec![agent, target],
        };

        let mut arc = hull_arc(&hull, agent, target, far_arc);
        // If the arc starts at the far end we would hop end-to-end and cross
        // ourselves; walk it the other way instead.
        if let (Some(&first), Some(&last)) = (arc.first(), arc.last()) {
            if (first - agent).norm() > (last - agent).norm() {
                arc.reverse();
            }
        }

        // Drop hull vertices that are only the rounded stroke caps around
        // the segment's own endpoints, not real detour geometry.
        let keep = self.cfg.stroke_half_width + self.cfg.endpoint_eps;
        let mut path = Vec::with_capacity(arc.len() + 2);
        path.push(agent);
        path.extend(
            arc.into_iter()
                .filter(|&p| (p - agent).norm() >= keep && (p - target).norm() >= keep),
        );
        path.push(target);
        path
    }
}

impl RouteStrategy for HullRouter {
    fn route(
        &mut self,
        bounds: &Bounds,
        agent: Point,
        target: Point,
        obstacles: &[Obstacle],
    ) -> Result<Polyline> {
        let hit: Vec<Obstacle> = obstacles
            .iter()
            .filter(|o| segment_circle_intersects(agent, target, o.center, o.radius))
            .copied()
            .collect();

        let straight = vec![agent, target];
        if hit.is_empty() {
            if polyline_in_bounds(&straight, bounds) {
                return Ok(straight);
            }
            // Validated endpoints are in bounds, so an obstacle-free straight
            // segment can only be out of bounds if validation was skipped.
            return Err(SolveError::RouteInvariant { agent, target });
        }

        let path = self.detour(agent, target, &hit, false);
        if polyline_in_bounds(&path, bounds) {
            return Ok(path);
        }
        tracing::warn!(
            agent = ?(agent.x, agent.y),
            target = ?(target.x, target.y),
            "near-side detour leaves the boundary, trying the far arc"
        );
        let path = self.detour(agent, target, &hit, true);
        if polyline_in_bounds(&path, bounds) {
            return Ok(path);
        }
        Err(SolveError::UnreachableTarget { agent, target })
    }
}

/// Contiguous hull slice between the hull vertices nearest to `start` and
/// `end`: indices `[lo..=hi]`, or the complementary wrap-around slice when
/// `far_arc` is set.
fn hull_arc(hull: &[Point], start: Point, end: Point, far_arc: bool) -> Vec<Point> {
    let mut start_idx = 0usize;
    let mut end_idx = 0usize;
    let mut best_start = f64::MAX;
    let mut best_end = f64::MAX;
    for (k, &p) in hull.iter().enumerate() {
        let ds = (p - start).norm();
        if ds < best_start {
            best_start = ds;
            start_idx = k;
        }
        let de = (p - end).norm();
        if de < best_end {
            best_end = de;
            end_idx = k;
        }
    }
    let lo = start_idx.min(end_idx);
    let hi = start_idx.max(end_idx);
    if far_arc {
        let mut arc: Vec<Point> = hull[hi..].to_vec();
        arc.extend_from_slice(&hull[..=lo]);
        arc
    } else {
        hull[lo..=hi].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds10() -> Bounds {
        Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
    }

    #[test]
    fn straight_segment_preferred_when_clear() {
        let mut router = HullRouter::new(RouterCfg::default());
        let path = router
            .route(
                &bounds10(),
                Point::new(1.0, 1.0),
                Point::new(9.0, 9.0),
                &[],
            )
            .unwrap();
        assert_eq!(path, vec![Point::new(1.0, 1.0), Point::new(9.0, 9.0)]);
    }

    #[test]
    fn straight_branch_is_idempotent() {
        // The non-detour branch must not consume keepout state: routing the
        // same clear pair repeatedly yields the identical two-point path.
        let mut router = HullRouter::new(RouterCfg::default());
        let obstacles = [Obstacle::new(Point::new(5.0, 5.0), 1.0)];
        let a = Point::new(1.0, 1.0);
        let t = Point::new(1.0, 9.0);
        let p1 = router.route(&bounds10(), a, t, &obstacles).unwrap();
        let p2 = router.route(&bounds10(), a, t, &obstacles).unwrap();
        let p3 = router.route(&bounds10(), a, t, &obstacles).unwrap();
        assert_eq!(p1, vec![a, t]);
        assert_eq!(p1, p2);
        assert_eq!(p2, p3);
    }

    #[test]
    fn detour_wraps_blocking_obstacle() {
        let mut router = HullRouter::new(RouterCfg::default());
        let a = Point::new(4.0, 7.0);
        let t = Point::new(8.0, 9.0);
        // Disc centered on the segment midline; both endpoints are well
        // clear of it, so only a detour can connect them.
        let obstacles = [Obstacle::new(Point::new(6.0, 8.0), 0.5)];
        let path = router.route(&bounds10(), a, t, &obstacles).unwrap();
        assert_eq!(*path.first().unwrap(), a);
        assert_eq!(*path.last().unwrap(), t);
        assert!(path.len() >= 3, "expected at least one detour vertex");
        assert!(polyline_in_bounds(&path, &bounds10()));
        // The detour must clear the base disc at every vertex.
        for &p in &path[1..path.len() - 1] {
            assert!((p - Point::new(6.0, 8.0)).norm() > 0.5);
        }
    }

    #[test]
    fn successive_detours_widen() {
        let mut router = HullRouter::new(RouterCfg::default());
        let a = Point::new(1.0, 5.0);
        let t = Point::new(9.0, 5.0);
        let obstacles = [Obstacle::new(Point::new(5.0, 5.0), 1.5)];
        let p1 = router.route(&bounds10(), a, t, &obstacles).unwrap();
        let p2 = router.route(&bounds10(), a, t, &obstacles).unwrap();
        let clearance = |path: &[Point]| {
            path.iter()
                .map(|&p| (p - Point::new(5.0, 5.0)).norm())
                .fold(f64::MAX, f64::min)
        };
        assert!(clearance(&p2) > clearance(&p1));
    }

    #[test]
    fn blocked_top_edge_routes_underneath() {
        // Obstacle hugging the top edge: the hull arc over the top leaves
        // the boundary, so only the arc underneath is acceptable.
        let mut router = HullRouter::new(RouterCfg::default());
        let a = Point::new(0.5, 9.0);
        let t = Point::new(9.5, 9.0);
        let obstacles = [Obstacle::new(Point::new(5.0, 9.0), 2.0)];
        let path = router.route(&bounds10(), a, t, &obstacles).unwrap();
        assert!(polyline_in_bounds(&path, &bounds10()));
        assert!(path.len() >= 3);
    }

    #[test]
    fn unreachable_when_both_arcs_leave_bounds() {
        let mut router = HullRouter::new(RouterCfg::default());
        let a = Point::new(0.5, 0.5);
        let t = Point::new(9.5, 9.5);
        // Disc pokes out of all four sides; every hull arc between the
        // endpoints carries out-of-bounds vertices.
        let obstacles = [Obstacle::new(Point::new(5.0, 5.0), 6.0)];
        let err = router.route(&bounds10(), a, t, &obstacles).unwrap_err();
        assert!(matches!(err, SolveError::UnreachableTarget { .. }));
    }

    #[test]
    fn invariant_violation_fails_fast() {
        let mut router = HullRouter::new(RouterCfg::default());
        // Endpoint outside the boundary with no obstacle in the way.
        let err = router
            .route(
                &bounds10(),
                Point::new(1.0, 1.0),
                Point::new(12.0, 1.0),
                &[],
            )
            .unwrap_err();
        assert!(matches!(err, SolveError::RouteInvariant { .. }));
    }

    #[test]
    fn keepout_schedule_is_strictly_increasing() {
        let mut ks = KeepoutSchedule::new(0.05, 0.05);
        let a = ks.draw();
        let b = ks.draw();
        let c = ks.draw();
        assert!((a - 0.05).abs() < 1e-12);
        assert!(b > a && c > b);
    }
}
