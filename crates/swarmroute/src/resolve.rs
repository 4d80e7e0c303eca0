//! Post-assignment crossing detection and repair.
//!
//! Two assigned routes must never cross. When a pair does, the agents are
//! exchanged and both paths recomputed; geometrically, uncrossing an X
//! never lengthens the total and removes the intersection for straight
//! segments. The scan runs in descending index order on both loops, which
//! unwinds crossings in the reverse of the order the auction created them;
//! the ascending scan was observed not to converge on the same inputs.
//!
//! The reference algorithm loops until a clean pass with no termination
//! proof, so the pass count is capped here and overrunning it is a hard
//! error instead of a hang.

use crate::auction::Assignment;
use crate::error::{Result, SolveError};
use crate::geom::{polylines_intersect, Bounds, Obstacle};
use crate::route::RouteStrategy;

/// Repair crossings in place until a full pass finds none.
///
/// Fewer than two assignments are trivially crossing-free. Fails with
/// `CrossingUnresolved` after `max_passes` dirty passes.
pub fn resolve(
    bounds: &Bounds,
    assignments: &mut [Assignment],
    obstacles: &[Obstacle],
    router: &mut dyn RouteStrategy,
    max_passes: usize,
) -> Result<()> {
    let n = assignments.len();
    if n < 2 {
        return Ok(());
    }

    for pass in 0..max_passes {
        let mut crossed = false;
        for i in (0..n).rev() {
            for j in (0..n).rev() {
                if i == j {
                    continue;
                }
                if !polylines_intersect(&assignments[i].path, &assignments[j].path) {
                    continue;
                }
                crossed = true;
                tracing::debug!(pass, i, j, "paths cross, swapping agents");
                let agent_i = assignments[i].agent;
                assignments[i].agent = assignments[j].agent;
                assignments[j].agent = agent_i;
                assignments[i].path = router.route(
                    bounds,
                    assignments[i].agent,
                    assignments[i].target,
                    obstacles,
                )?;
                assignments[j].path = router.route(
                    bounds,
                    assignments[j].agent,
                    assignments[j].target,
                    obstacles,
                )?;
            }
        }
        if !crossed {
            return Ok(());
        }
    }
    Err(SolveError::CrossingUnresolved { passes: max_passes })
}
