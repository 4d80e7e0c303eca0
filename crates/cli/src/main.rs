use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

use swarmroute::prelude::*;
use swarmroute::validate;

mod render;
mod scenario;

use scenario::ScenarioFile;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Multi-agent route assignment runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a scenario and render the scene as diagnostic CSV
    Solve {
        /// JSON scenario file
        #[arg(long)]
        scenario: PathBuf,
        /// Output CSV path; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate a scenario without solving it
    Check {
        #[arg(long)]
        scenario: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { scenario, out } => run_solve(scenario, out),
        Action::Check { scenario } => run_check(scenario),
    }
}

fn run_solve(path: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let scene = ScenarioFile::load(&path)?.into_scene();
    tracing::info!(
        agents = scene.agents.len(),
        targets = scene.targets.len(),
        obstacles = scene.obstacles.len(),
        "solving scenario"
    );
    let results = solve(&scene.bounds, &scene.agents, &scene.targets, &scene.obstacles)?;
    let csv = render::render_csv(&scene.bounds, &scene.obstacles, &results);
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&out, csv)?;
            tracing::info!(out = %out.display(), assigned = results.len(), "wrote results");
        }
        None => print!("{csv}"),
    }
    Ok(())
}

fn run_check(path: PathBuf) -> Result<()> {
    let scene = ScenarioFile::load(&path)?.into_scene();
    let cfg = SolveCfg::default();
    match validate::check(
        &scene.bounds,
        &scene.agents,
        &scene.targets,
        &scene.obstacles,
        cfg.max_agents,
    ) {
        Ok(()) => {
            println!("scenario ok");
            Ok(())
        }
        Err(v) => bail!("scenario invalid: {v}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_scenario(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f
    }

    #[test]
    fn solve_writes_csv_file() {
        let f = write_scenario(
            r#"{
                "bounds": { "min": [0.0, 0.0], "max": [10.0, 10.0] },
                "agents": [[1.0, 1.0]],
                "targets": [[9.0, 9.0]]
            }"#,
        );
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("results.csv");
        run_solve(f.path().to_path_buf(), Some(out.clone())).unwrap();
        let csv = std::fs::read_to_string(out).unwrap();
        assert!(csv.contains("\"[(1,1),(9,9)]\""));
    }

    #[test]
    fn check_rejects_bad_scene() {
        let f = write_scenario(
            r#"{ "bounds": { "min": [0.0, 0.0], "max": [0.0, 0.0] } }"#,
        );
        assert!(run_check(f.path().to_path_buf()).is_err());
    }

    #[test]
    fn check_accepts_good_scene() {
        let f = write_scenario(
            r#"{
                "bounds": { "min": [0.0, 0.0], "max": [10.0, 10.0] },
                "agents": [[1.0, 1.0]],
                "targets": [[9.0, 9.0]],
                "obstacles": [{ "center": [5.0, 5.0], "radius": 1.0 }]
            }"#,
        );
        run_check(f.path().to_path_buf()).unwrap();
    }
}
