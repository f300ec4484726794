//! # Drift Demo
//!
//! Cells under a gentle pull toward the domain center plus a constant
//! downward drift, settling into a packed pile on the floor — the classic
//! position-based-dynamics stack. Runs in real time with a fixed delta.
//!
//! Run with: `cargo run --example drift`

use cpde::prelude::*;

fn main() {
    let frames: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1_000);

    println!("=== CPDE Drift Demo ===");
    println!("30 cells, radius 5, center pull + downward drift");
    println!("Frames: {}", frames);
    println!();

    let mut world = Simulation::new()
        .with_cell_count(30)
        .with_cell_radius(5.0)
        .with_domain(100.0, 100.0)
        .with_force(ForceField::Attract {
            target: Vec2::new(50.0, 50.0),
            intensity: 0.01,
        })
        .with_force(ForceField::Drift(Vec2::new(0.0, -2.5)))
        .build()
        .expect("valid configuration");

    // Pace the run like a render loop would: fixed physics delta,
    // wall-clock frames.
    let mut time = Time::new();
    time.set_fixed_delta(Some(0.2));

    let report_every = (frames / 10).max(1);
    while time.frame() < frames {
        let (_, dt) = time.update();
        let summary = world.step(dt);
        if time.frame() % report_every == 0 {
            let mean_y: f32 = world.cells().iter().map(|c| c.position.y).sum::<f32>()
                / world.cells().len() as f32;
            println!(
                "frame {:5}  mean y = {:5.1}  contacts: {:3} pair, {:2} clamped",
                time.frame(),
                mean_y,
                summary.pair_contacts,
                summary.clamped,
            );
        }
    }

    println!();
    println!("Final positions:");
    for (i, cell) in world.cells().iter().enumerate() {
        println!("  cell {:2}: ({:6.2}, {:6.2})", i, cell.position.x, cell.position.y);
    }
}
