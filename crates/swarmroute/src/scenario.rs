//! Deterministic random scenarios (rejection sampling + replay tokens).
//!
//! Purpose
//! - Provide reproducible valid scenarios for benches and stress tests:
//!   obstacles first, then agents and targets drawn until they clear every
//!   placement rule the validator enforces.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Bounds, Obstacle, Point};
use crate::validate;

/// Generator parameters.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioCfg {
    pub bounds: Bounds,
    pub agents: usize,
    pub targets: usize,
    pub obstacles: usize,
    /// Obstacle radii drawn uniformly from this range.
    pub radius_min: f64,
    pub radius_max: f64,
}

impl Default for ScenarioCfg {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
            agents: 4,
            targets: 4,
            obstacles: 2,
            radius_min: 0.3,
            radius_max: 1.2,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A complete generated scene.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub bounds: Bounds,
    pub agents: Vec<Point>,
    pub targets: Vec<Point>,
    pub obstacles: Vec<Obstacle>,
}

/// Draw a scenario that passes validation, or `None` if the attempt budget
/// runs out (tight bounds with many large obstacles).
pub fn draw_scenario(cfg: ScenarioCfg, tok: ReplayToken) -> Option<Scenario> {
    const ATTEMPTS: usize = 256;
    let mut rng = tok.to_std_rng();
    let b = cfg.bounds;

    let mut obstacles: Vec<Obstacle> = Vec::with_capacity(cfg.obstacles);
    for _ in 0..cfg.obstacles {
        let mut placed = false;
        for _ in 0..ATTEMPTS {
            let radius = rng.gen_range(cfg.radius_min..=cfg.radius_max);
            // Keep centers one radius off the fence so the disc never
            // reaches the perimeter (no cover/split rejections later).
            let margin = radius * 1.05;
            if 2.0 * margin >= b.width() || 2.0 * margin >= b.height() {
                continue;
            }
            let center = Point::new(
                rng.gen_range(b.min.x + margin..b.max.x - margin),
                rng.gen_range(b.min.y + margin..b.max.y - margin),
            );
            obstacles.push(Obstacle::new(center, radius));
            placed = true;
            break;
        }
        if !placed {
            return None;
        }
    }

    let draw_clear_point = |rng: &mut StdRng, obstacles: &[Obstacle]| -> Option<Point> {
        for _ in 0..ATTEMPTS {
            let p = Point::new(
                rng.gen_range(b.min.x..b.max.x),
                rng.gen_range(b.min.y..b.max.y),
            );
            if b.contains_strict(p) && obstacles.iter().all(|o| !o.covers(p)) {
                return Some(p);
            }
        }
        None
    };

    let mut agents = Vec::with_capacity(cfg.agents);
    for _ in 0..cfg.agents {
        agents.push(draw_clear_point(&mut rng, &obstacles)?);
    }
    let mut targets = Vec::with_capacity(cfg.targets);
    for _ in 0..cfg.targets {
        targets.push(draw_clear_point(&mut rng, &obstacles)?);
    }

    let scenario = Scenario {
        bounds: b,
        agents,
        targets,
        obstacles,
    };
    validate::is_valid(
        &scenario.bounds,
        &scenario.agents,
        &scenario.targets,
        &scenario.obstacles,
        cfg.agents.max(4),
    )
    .then_some(scenario)
}
