//! Scenario validation: the placement rules every solve assumes.
//!
//! Rules
//! - Boundary has strictly positive width and height.
//! - Agent count stays under the configured cap.
//! - Agents and targets sit strictly inside the boundary (not on the edge)
//!   and strictly outside every obstacle's base disc (not on the rim).
//! - No obstacle swallows the whole boundary or splits it into more than
//!   one connected region; either would leave some placements unreachable
//!   by construction.
//!
//! `check` reports the first violation with indices for diagnosis;
//! `is_valid` is the plain boolean form of the same contract.

use thiserror::Error;

use crate::geom::{segment_circle_interval, Bounds, Obstacle, Point};

/// First validation rule a scenario broke.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputViolation {
    #[error("boundary has no width or height")]
    DegenerateBounds,
    #[error("{count} agents exceed the maximum of {max}")]
    TooManyAgents { count: usize, max: usize },
    #[error("agent {index} lies outside the boundary")]
    AgentOutOfBounds { index: usize },
    #[error("agent {agent} lies inside obstacle {obstacle}")]
    AgentInObstacle { agent: usize, obstacle: usize },
    #[error("target {index} lies outside the boundary")]
    TargetOutOfBounds { index: usize },
    #[error("target {target} lies inside obstacle {obstacle}")]
    TargetInObstacle { target: usize, obstacle: usize },
    #[error("obstacle {index} covers the entire boundary")]
    ObstacleCoversBounds { index: usize },
    #[error("obstacle {index} splits the boundary into disconnected regions")]
    ObstacleSplitsBounds { index: usize },
}

/// Validate a scenario, reporting the first broken rule.
pub fn check(
    bounds: &Bounds,
    agents: &[Point],
    targets: &[Point],
    obstacles: &[Obstacle],
    max_agents: usize,
) -> Result<(), InputViolation> {
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Err(InputViolation::DegenerateBounds);
    }
    if agents.len() > max_agents {
        return Err(InputViolation::TooManyAgents {
            count: agents.len(),
            max: max_agents,
        });
    }
    for (index, &p) in agents.iter().enumerate() {
        if !bounds.contains_strict(p) {
            return Err(InputViolation::AgentOutOfBounds { index });
        }
        for (obstacle, obs) in obstacles.iter().enumerate() {
            if obs.covers(p) {
                return Err(InputViolation::AgentInObstacle {
                    agent: index,
                    obstacle,
                });
            }
        }
    }
    for (index, &p) in targets.iter().enumerate() {
        if !bounds.contains_strict(p) {
            return Err(InputViolation::TargetOutOfBounds { index });
        }
        for (obstacle, obs) in obstacles.iter().enumerate() {
            if obs.covers(p) {
                return Err(InputViolation::TargetInObstacle {
                    target: index,
                    obstacle,
                });
            }
        }
    }
    for (index, obs) in obstacles.iter().enumerate() {
        if disc_covers_rect(bounds, obs) {
            return Err(InputViolation::ObstacleCoversBounds { index });
        }
        if disc_splits_rect(bounds, obs) {
            return Err(InputViolation::ObstacleSplitsBounds { index });
        }
    }
    Ok(())
}

/// Boolean contract form of `check`.
#[inline]
pub fn is_valid(
    bounds: &Bounds,
    agents: &[Point],
    targets: &[Point],
    obstacles: &[Obstacle],
    max_agents: usize,
) -> bool {
    check(bounds, agents, targets, obstacles, max_agents).is_ok()
}

/// A disc covers the rect iff it covers all four corners (discs are convex).
fn disc_covers_rect(bounds: &Bounds, obs: &Obstacle) -> bool {
    bounds.corners().iter().all(|&c| obs.covers(c))
}

/// Does the disc cut the rect into more than one connected region?
///
/// The rect interior minus a convex disc is disconnected exactly when the
/// rect's perimeter loop minus the disc falls into two or more arcs. So:
/// collect the perimeter intervals the disc covers, merge them along the
/// loop (including across the wrap), and count the gaps.
fn disc_splits_rect(bounds: &Bounds, obs: &Obstacle) -> bool {
    // Perimeter parameterized edge by edge; intervals as (start, end) in a
    // global coordinate where edge k spans [k, k+1).
    let mut covered: Vec<(f64, f64)> = Vec::new();
    for (k, (a, b)) in bounds.edges().into_iter().enumerate() {
        if let Some((t0, t1)) = segment_circle_interval(a, b, obs.center, obs.radius) {
            covered.push((k as f64 + t0, k as f64 + t1));
        }
    }
    if covered.is_empty() {
        return false;
    }
    covered.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    // Merge adjacent/overlapping intervals (within a small slack so a disc
    // passing over a corner counts as one arc).
    const SLACK: f64 = 1e-9;
    let mut merged: Vec<(f64, f64)> = Vec::with_capacity(covered.len());
    for iv in covered {
        match merged.last_mut() {
            Some(last) if iv.0 <= last.1 + SLACK => last.1 = last.1.max(iv.1),
            _ => merged.push(iv),
        }
    }
    // Merge across the loop wrap (perimeter coordinate 4.0 == 0.0).
    if merged.len() > 1 {
        let first_start = merged[0].0;
        let last_end = merged[merged.len() - 1].1;
        if last_end + SLACK >= 4.0 && first_start <= SLACK {
            let (_, e) = merged.remove(0);
            if let Some(last) = merged.last_mut() {
                last.1 = last.1.max(e + 4.0);
            }
        }
    }
    // One covered arc leaves one perimeter gap: still connected. Two or
    // more arcs mean the disc bridges the rect and separates it.
    merged.len() >= 2
}
