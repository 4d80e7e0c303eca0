//! Error types for the solver pipeline.

use thiserror::Error;

use crate::geom::Point;
use crate::validate::InputViolation;

/// Solver error type.
#[derive(Error, Debug)]
pub enum SolveError {
    /// The scenario failed validation; nothing was computed or mutated.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputViolation),

    /// Neither hull orientation produced an in-bounds detour.
    #[error(
        "no in-bounds route from agent ({:.3}, {:.3}) to target ({:.3}, {:.3})",
        .agent.x, .agent.y, .target.x, .target.y
    )]
    UnreachableTarget { agent: Point, target: Point },

    /// The straight segment hit no obstacle yet left the boundary; the
    /// validator should have rejected such endpoints.
    #[error(
        "route invariant violated: obstacle-free segment ({:.3}, {:.3}) -> ({:.3}, {:.3}) leaves the boundary",
        .agent.x, .agent.y, .target.x, .target.y
    )]
    RouteInvariant { agent: Point, target: Point },

    /// Pairwise swap repair still left crossing paths after the pass budget.
    #[error("crossing repair did not converge within {passes} passes")]
    CrossingUnresolved { passes: usize },
}

pub type Result<T> = std::result::Result<T, SolveError>;
