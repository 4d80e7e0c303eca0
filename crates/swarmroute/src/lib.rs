//! Offline multi-agent route assignment inside a rectangular boundary.
//!
//! Pipeline
//! - Validate the scenario (placement rules, agent cap).
//! - Auction targets to agents in input-priority order; each bid is a
//!   collision-free path from the hull router.
//! - Repair pairwise path crossings by swapping agents and rerouting.
//!
//! One call to [`solver::solve`] is one deterministic batch solve; nothing
//! persists across calls. The hull-detour heuristic is swappable behind
//! [`route::RouteStrategy`].

pub mod auction;
pub mod error;
pub mod geom;
pub mod resolve;
pub mod route;
pub mod scenario;
pub mod solver;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::auction::Assignment;
    pub use crate::error::{Result, SolveError};
    pub use crate::geom::{Bounds, Obstacle, Point, Polyline};
    pub use crate::route::{HullRouter, RouteStrategy, RouterCfg};
    pub use crate::solver::{solve, solve_with_cfg, SolveCfg};
    pub use crate::validate::InputViolation;
}
