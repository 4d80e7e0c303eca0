//! JSON scenario files for the solver.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use swarmroute::prelude::*;

/// On-disk scenario schema.
///
/// ```json
/// {
///   "bounds": { "min": [0.0, 0.0], "max": [10.0, 10.0] },
///   "agents": [[4.0, 7.0], [2.0, 9.0]],
///   "targets": [[8.0, 9.0]],
///   "obstacles": [{ "center": [5.0, 5.0], "radius": 2.0 }]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub bounds: BoundsSpec,
    #[serde(default)]
    pub agents: Vec<[f64; 2]>,
    #[serde(default)]
    pub targets: Vec<[f64; 2]>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,
}

#[derive(Debug, Deserialize)]
pub struct BoundsSpec {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

#[derive(Debug, Deserialize)]
pub struct ObstacleSpec {
    pub center: [f64; 2],
    pub radius: f64,
}

/// A loaded scene in solver types.
pub struct Scene {
    pub bounds: Bounds,
    pub agents: Vec<Point>,
    pub targets: Vec<Point>,
    pub obstacles: Vec<Obstacle>,
}

impl ScenarioFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn into_scene(self) -> Scene {
        let p = |xy: [f64; 2]| Point::new(xy[0], xy[1]);
        Scene {
            bounds: Bounds {
                min: p(self.bounds.min),
                max: p(self.bounds.max),
            },
            agents: self.agents.into_iter().map(p).collect(),
            targets: self.targets.into_iter().map(p).collect(),
            obstacles: self
                .obstacles
                .into_iter()
                .map(|o| Obstacle {
                    center: p(o.center),
                    radius: o.radius,
                })
                .collect(),
        }
    }
}
