//! Greedy bidding auction assigning agents to targets.
//!
//! Targets are processed strictly in input order; this is a deliberate
//! priority hierarchy, target 0 gets the globally best available agent,
//! target 1 the next best, and so on. Every agent still in the pool bids a
//! candidate path; the shortest bid wins (strict `<`, so ties keep the
//! earliest pool position) and the winner leaves the pool.

use crate::error::Result;
use crate::geom::{polyline_length, Bounds, Obstacle, Point, Polyline};
use crate::route::RouteStrategy;

/// One agent's proposal for one target. Discarded when the round resolves.
#[derive(Clone, Debug)]
pub struct Bid {
    pub agent_idx: usize,
    pub agent: Point,
    pub path: Polyline,
    pub length: f64,
}

/// A solved agent→target pairing.
///
/// `id` is the target's input position. The crossing resolver may later
/// swap `agent` (and recompute `path`); `id` and `target` never change.
#[derive(Clone, Debug)]
pub struct Assignment {
    pub id: usize,
    pub agent: Point,
    pub target: Point,
    pub path: Polyline,
}

/// Run the auction. `pool` is consumed one winner per target; when it runs
/// dry the remaining targets get no assignment (soft condition, warned).
pub fn assign(
    bounds: &Bounds,
    targets: &[Point],
    pool: &mut Vec<Point>,
    obstacles: &[Obstacle],
    router: &mut dyn RouteStrategy,
) -> Result<Vec<Assignment>> {
    let mut results = Vec::with_capacity(targets.len().min(pool.len()));

    for (id, &target) in targets.iter().enumerate() {
        if pool.is_empty() {
            tracing::warn!(
                unassigned = targets.len() - id,
                "agent pool exhausted, remaining targets get no path"
            );
            break;
        }
        tracing::debug!(target = id, bidders = pool.len(), "bidding opens");

        let mut winner: Option<Bid> = None;
        for (agent_idx, &agent) in pool.iter().enumerate() {
            let path = router.route(bounds, agent, target, obstacles)?;
            let length = polyline_length(&path);
            tracing::debug!(target = id, bidder = agent_idx, length, "bid received");
            if winner.as_ref().map_or(true, |w| length < w.length) {
                winner = Some(Bid {
                    agent_idx,
                    agent,
                    path,
                    length,
                });
            }
        }

        if let Some(won) = winner {
            tracing::debug!(target = id, selected = won.agent_idx, "bid accepted");
            pool.remove(won.agent_idx);
            results.push(Assignment {
                id,
                agent: won.agent,
                target,
                path: won.path,
            });
        }
    }
    Ok(results)
}
