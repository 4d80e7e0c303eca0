//! Diagnostic CSV rendering of a solved scene.
//!
//! Row types, one scene per file:
//! - `1`: an assignment (id, agent, target, quoted path point list),
//! - `2`: the boundary corners,
//! - `3`: an obstacle (center, radius).
//!
//! The path column is a bracketed tuple list, e.g. `"[(4,7),(5.2,8.1),(8,9)]"`,
//! so downstream plotting tooling can parse it as a literal.

use swarmroute::prelude::*;

/// Render the whole scene as CSV text.
pub fn render_csv(bounds: &Bounds, obstacles: &[Obstacle], results: &[Assignment]) -> String {
    let mut out = String::new();
    out.push_str("type,node_idx,agent_x,agent_y,target_x,target_y,");
    out.push_str("path,");
    out.push_str("obstacle_x,obstacle_y,obstacle_rad,");
    out.push_str("boundary_x0,boundary_x1,boundary_y0,boundary_y1\n");

    out.push_str(&format!(
        "2,,,,,,,,,,{},{},{},{}\n",
        bounds.min.x, bounds.max.x, bounds.min.y, bounds.max.y
    ));

    for r in results {
        out.push_str(&format!(
            "1,{},{},{},{},{},\"{}\",,,,,\n",
            r.id,
            r.agent.x,
            r.agent.y,
            r.target.x,
            r.target.y,
            path_literal(&r.path)
        ));
    }

    for o in obstacles {
        out.push_str(&format!(
            "3,,,,,,,{},{},{},,,,\n",
            o.center.x, o.center.y, o.radius
        ));
    }
    out
}

fn path_literal(path: &[Point]) -> String {
    let pts: Vec<String> = path.iter().map(|p| format!("({},{})", p.x, p.y)).collect();
    format!("[{}]", pts.join(","))
}
