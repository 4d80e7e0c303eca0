//! Solve pipeline: validate → auction → crossing repair.

use crate::auction::{assign, Assignment};
use crate::error::Result;
use crate::geom::{Bounds, Obstacle, Point};
use crate::resolve::resolve;
use crate::route::{HullRouter, RouterCfg};
use crate::validate;

/// Whole-solve tunables.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    pub router: RouterCfg,
    /// Maximum agent count accepted by the validator.
    pub max_agents: usize,
    /// Crossing-repair pass budget before giving up hard.
    pub max_repair_passes: usize,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            router: RouterCfg::default(),
            max_agents: 4,
            max_repair_passes: 32,
        }
    }
}

/// One-shot batch solve with default configuration.
///
/// Returns assignments in target input order; when targets outnumber
/// agents the tail targets are simply absent. The keepout state lives in a
/// router created here, so independent solves never influence each other.
pub fn solve(
    bounds: &Bounds,
    agents: &[Point],
    targets: &[Point],
    obstacles: &[Obstacle],
) -> Result<Vec<Assignment>> {
    solve_with_cfg(bounds, agents, targets, obstacles, SolveCfg::default())
}

/// `solve` with explicit configuration.
pub fn solve_with_cfg(
    bounds: &Bounds,
    agents: &[Point],
    targets: &[Point],
    obstacles: &[Obstacle],
    cfg: SolveCfg,
) -> Result<Vec<Assignment>> {
    validate::check(bounds, agents, targets, obstacles, cfg.max_agents)?;

    let mut router = HullRouter::new(cfg.router);
    let mut pool = agents.to_vec();
    let mut assignments = assign(bounds, targets, &mut pool, obstacles, &mut router)?;
    resolve(
        bounds,
        &mut assignments,
        obstacles,
        &mut router,
        cfg.max_repair_passes,
    )?;
    tracing::info!(
        assigned = assignments.len(),
        targets = targets.len(),
        "solve complete"
    );
    Ok(assignments)
}
