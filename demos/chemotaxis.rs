//! # Chemotaxis Demo
//!
//! Thirty cells drift toward an attractant source at (10, 10), flowing
//! around a diagonal wall and piling up without interpenetrating.
//!
//! Run with: `cargo run --example chemotaxis`

use cpde::prelude::*;

fn main() {
    let steps: u32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2_000);

    println!("=== CPDE Chemotaxis Demo ===");
    println!("30 cells, radius 2, attracted to (10, 10)");
    println!("Obstacle: segment (10,10) -> (40,40)");
    println!("Steps: {}", steps);
    println!();

    let mut world = Simulation::new()
        .with_cell_count(30)
        .with_cell_radius(2.0)
        .with_domain(100.0, 100.0)
        .with_time_step(0.005)
        .with_force(ForceField::Attract {
            target: Vec2::new(10.0, 10.0),
            intensity: 2.0,
        })
        .with_segment(Vec2::new(10.0, 10.0), Vec2::new(40.0, 40.0))
        .build()
        .expect("valid configuration");

    let report_every = (steps / 10).max(1);
    for i in 0..steps {
        let summary = world.tick();
        if i % report_every == 0 {
            let target = Vec2::new(10.0, 10.0);
            let mean_dist: f32 = world
                .cells()
                .iter()
                .map(|c| (c.position - target).length())
                .sum::<f32>()
                / world.cells().len() as f32;
            println!(
                "t = {:6.2}  mean dist to target = {:6.2}  contacts: {:3} pair / {:3} obstacle",
                world.elapsed(),
                mean_dist,
                summary.pair_contacts,
                summary.obstacle_contacts,
            );
        }
    }

    println!();
    println!("Final positions:");
    for (i, cell) in world.cells().iter().enumerate() {
        println!("  cell {:2}: ({:6.2}, {:6.2})", i, cell.position.x, cell.position.y);
    }
}
