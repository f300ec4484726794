//! # Dragging Demo
//!
//! Drives the interaction API without a real pointer: picks the cell
//! nearest a "press" point, drags it through a resting pile, and releases
//! it, printing how the pile reacts. A UI host would call the same three
//! methods from its pointer handlers, in world coordinates.
//!
//! Run with: `cargo run --example dragging`

use cpde::prelude::*;

fn main() {
    println!("=== CPDE Dragging Demo ===");
    println!();

    let mut world = Simulation::new()
        .with_cell_count(12)
        .with_cell_radius(2.0)
        .with_domain(100.0, 100.0)
        .with_time_step(0.05)
        .with_spawner(|ctx| ctx.grid_position(4, 3))
        .with_drag_radius(3.0)
        .build()
        .expect("valid configuration");

    // Press near the first grid cell. The pick radius mirrors the usual
    // "within twice the cell radius" pointer tolerance.
    let press = Vec2::new(13.0, 17.0);
    let picked = world.select_nearest(press, 4.0);
    println!("press at ({:.0}, {:.0}) picked cell {:?}", press.x, press.y, picked);

    if picked.is_some() {
        // Drag the held cell straight through the pile; the solver shoves
        // bystanders out of the way each frame at the enlarged drag radius.
        for step in 0..40 {
            let x = 13.0 + step as f32 * 1.5;
            world.drag_selected(Vec2::new(x.min(85.0), 50.0));
            let summary = world.tick();
            if summary.pair_contacts > 0 {
                println!(
                    "  frame {:2}: dragged to x = {:5.1}, pushed {} neighbor pair(s)",
                    world.frame(),
                    x.min(85.0),
                    summary.pair_contacts
                );
            }
        }
        world.release_selected();
        println!("released");
    }

    println!();
    println!("Final positions:");
    for (i, cell) in world.cells().iter().enumerate() {
        println!("  cell {:2}: ({:6.2}, {:6.2})", i, cell.position.x, cell.position.y);
    }
}
