//! Two agents squeezing past a pair of stacked obstacles ("peapod" scene):
//! both straight lines are blocked, so both routes wrap the hulls, and the
//! growing keepout fans the second route wider than the first.

use swarmroute::prelude::*;

fn main() -> Result<()> {
    let bounds = Bounds {
        min: Point::new(0.0, 0.0),
        max: Point::new(10.0, 10.0),
    };
    let obstacles = [
        Obstacle {
            center: Point::new(3.0, 3.0),
            radius: 1.0,
        },
        Obstacle {
            center: Point::new(6.5, 6.5),
            radius: 1.0,
        },
    ];
    let agents = [Point::new(1.2, 1.0), Point::new(0.1, 0.1)];
    let targets = [Point::new(9.5, 9.5), Point::new(9.8, 9.8)];

    let results = solve(&bounds, &agents, &targets, &obstacles)?;
    for r in &results {
        let pts: Vec<String> = r
            .path
            .iter()
            .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
            .collect();
        println!("assignment {}: {}", r.id, pts.join(" -> "));
    }
    Ok(())
}
