//! Integration tests for the projection solver.
//!
//! These exercise the public API end to end: whole worlds stepped through
//! the full pipeline, checked against the solver's documented geometric
//! guarantees.

use cpde::prelude::*;

const EPS: f32 = 1e-4;

// ============================================================================
// Pairwise resolution
// ============================================================================

#[test]
fn test_separated_cells_do_not_move() {
    let mut world = Simulation::new()
        .with_cell_count(0)
        .with_cell(Vec2::new(20.0, 50.0), 2.0)
        .with_cell(Vec2::new(80.0, 50.0), 2.0)
        .build()
        .unwrap();

    let before: Vec<Vec2> = world.cells().iter().map(|c| c.position).collect();
    let summary = world.step(0.01);

    assert!(!summary.resolved_overlap());
    for (cell, p) in world.cells().iter().zip(&before) {
        assert_eq!(cell.position, *p);
    }
}

#[test]
fn test_overlapping_pair_separates_to_contact() {
    // Two cells of radius 2 at (0,0) and (1,0): overlap 3, each cell moves
    // half of it, final distance exactly r1 + r2 = 4 (pre-clamp symmetry is
    // kept here by centering the pair in the domain).
    let mut world = Simulation::new()
        .with_cell_count(0)
        .with_cell(Vec2::new(49.5, 50.0), 2.0)
        .with_cell(Vec2::new(50.5, 50.0), 2.0)
        .build()
        .unwrap();

    let summary = world.step(0.01);
    assert!(summary.resolved_overlap());

    let a = world.cells()[0].position;
    let b = world.cells()[1].position;
    assert!(((b - a).length() - 4.0).abs() < EPS);
    // Half the overlap each, in opposite directions.
    assert!((a - Vec2::new(48.0, 50.0)).length() < EPS);
    assert!((b - Vec2::new(52.0, 50.0)).length() < EPS);
}

#[test]
fn test_coincident_cells_resolve_deterministically() {
    let build = || {
        Simulation::new()
            .with_cell_count(0)
            .with_cell(Vec2::new(50.0, 50.0), 2.0)
            .with_cell(Vec2::new(50.0, 50.0), 2.0)
            .build()
            .unwrap()
    };
    let mut a = build();
    let mut b = build();
    a.step(0.01);
    b.step(0.01);

    // The degenerate direction is fixed, not random: both runs agree, and
    // the pair splits along the x axis.
    assert_eq!(a.cells()[0].position, b.cells()[0].position);
    assert_eq!(a.cells()[1].position, b.cells()[1].position);
    let d = a.cells()[1].position - a.cells()[0].position;
    assert!(d.y.abs() < EPS);
    assert!((d.x - 4.0).abs() < EPS);
}

// ============================================================================
// Segment constraint
// ============================================================================

#[test]
fn test_segment_body_push_stays_on_original_side() {
    let mut world = Simulation::new()
        .with_cell_count(0)
        .with_segment(Vec2::new(20.0, 50.0), Vec2::new(80.0, 50.0))
        .with_cell(Vec2::new(50.0, 51.0), 2.0)
        .build()
        .unwrap();

    world.step(0.01);
    let p = world.cells()[0].position;
    assert!((p.y - 52.0).abs() < EPS);
    assert!((p.x - 50.0).abs() < EPS);
}

#[test]
fn test_segment_cap_push_is_radial() {
    // A cell beyond the end of the segment collides with the endpoint as a
    // point, independent of the segment's tangential direction.
    let mut world = Simulation::new()
        .with_cell_count(0)
        .with_segment(Vec2::new(20.0, 50.0), Vec2::new(60.0, 50.0))
        .with_cell(Vec2::new(61.0, 51.0), 2.0)
        .build()
        .unwrap();

    world.step(0.01);
    let p = world.cells()[0].position;
    assert!(((p - Vec2::new(60.0, 50.0)).length() - 2.0).abs() < EPS);
    // Pushed directly away from the endpoint.
    let dir = (p - Vec2::new(60.0, 50.0)).normalize();
    let expected = (Vec2::new(61.0, 51.0) - Vec2::new(60.0, 50.0)).normalize();
    assert!((dir - expected).length() < EPS);
}

// ============================================================================
// Half-plane constraint
// ============================================================================

#[test]
fn test_half_plane_pushes_to_radius() {
    // Cell radius 2 at (5,1), floor anchored at the origin with normal +Y:
    // cn = 1 < 2, push (0,1), final y = 3.
    let mut world = Simulation::new()
        .with_cell_count(0)
        .with_half_plane(Vec2::ZERO, Vec2::Y)
        .with_cell(Vec2::new(5.0, 1.0), 2.0)
        .build()
        .unwrap();

    let summary = world.step(0.01);
    assert_eq!(summary.obstacle_contacts, 1);
    let p = world.cells()[0].position;
    assert!((p.y - 3.0).abs() < EPS);
    assert!((p.x - 5.0).abs() < EPS);
}

#[test]
fn test_four_half_planes_contain_like_clamp() {
    let (w, h) = (100.0, 100.0);
    let mut world = Simulation::new()
        .with_cell_count(0)
        .with_domain(w, h)
        .with_half_plane(Vec2::ZERO, Vec2::X)
        .with_half_plane(Vec2::ZERO, Vec2::Y)
        .with_half_plane(Vec2::new(w, h), -Vec2::X)
        .with_half_plane(Vec2::new(w, h), -Vec2::Y)
        .with_cell(Vec2::new(99.5, 0.5), 2.0)
        .build()
        .unwrap();

    world.step(0.01);
    let p = world.cells()[0].position;
    assert!((p - Vec2::new(98.0, 2.0)).length() < EPS);
}

// ============================================================================
// Boundary clamp
// ============================================================================

#[test]
fn test_clamp_never_overshoots() {
    let mut world = Simulation::new()
        .with_cell_count(0)
        .with_cell(Vec2::new(50.0, 95.0), 2.0)
        .with_force(ForceField::Drift(Vec2::new(0.0, 40.0)))
        .build()
        .unwrap();

    for _ in 0..10 {
        world.step(1.0);
        let p = world.cells()[0].position;
        assert!((p.y - 98.0).abs() < EPS, "clamped exactly to the wall");
    }
}

#[test]
fn test_left_margin_offsets_left_wall() {
    let mut world = Simulation::new()
        .with_cell_count(0)
        .with_left_margin(10.0)
        .with_cell(Vec2::new(30.0, 50.0), 2.0)
        .with_force(ForceField::Drift(Vec2::new(-100.0, 0.0)))
        .build()
        .unwrap();

    world.step(1.0);
    assert!((world.cells()[0].position.x - 12.0).abs() < EPS);
}

// ============================================================================
// Whole-pipeline behavior
// ============================================================================

#[test]
fn test_chemotaxis_scenario_converges_to_target() {
    // The michi sketch: cells attracted to (10,10) pile up around the
    // target without interpenetrating.
    let mut world = Simulation::new()
        .with_seed(11)
        .with_cell_count(30)
        .with_cell_radius(2.0)
        .with_force(ForceField::Attract {
            target: Vec2::new(10.0, 10.0),
            intensity: 2.0,
        })
        .with_segment(Vec2::new(10.0, 10.0), Vec2::new(40.0, 40.0))
        .with_time_step(0.005)
        .build()
        .unwrap();

    for _ in 0..2000 {
        world.tick();
    }

    // Everyone ends up near the target...
    for cell in world.cells() {
        assert!((cell.position - Vec2::new(10.0, 10.0)).length() < 30.0);
    }
    // ...and the single-pass solver keeps residual overlap small.
    let cells = world.cells();
    for i in 0..cells.len() {
        for j in (i + 1)..cells.len() {
            let d = (cells[j].position - cells[i].position).length();
            assert!(d > 2.0, "cells {} and {} collapsed: dist {}", i, j, d);
        }
    }
}

#[test]
fn test_step_summary_counts() {
    let mut world = Simulation::new()
        .with_cell_count(0)
        .with_cell(Vec2::new(50.0, 50.0), 2.0)
        .with_cell(Vec2::new(51.0, 50.0), 2.0)
        .with_half_plane(Vec2::new(0.0, 49.0), Vec2::Y)
        .build()
        .unwrap();

    let summary = world.step(0.01);
    assert_eq!(summary.pair_contacts, 1);
    // Both cells sit within radius of the y = 49 boundary.
    assert_eq!(summary.obstacle_contacts, 2);
    assert!(summary.resolved_overlap());
}

#[test]
fn test_replay_is_deterministic() {
    let build = || {
        Simulation::new()
            .with_seed(99)
            .with_cell_count(20)
            .with_force(ForceField::Attract {
                target: Vec2::new(50.0, 50.0),
                intensity: 1.0,
            })
            .with_segment(Vec2::new(30.0, 20.0), Vec2::new(70.0, 80.0))
            .with_half_plane(Vec2::new(0.0, 5.0), Vec2::Y)
            .build()
            .unwrap()
    };

    let mut a = build();
    let mut b = build();
    for _ in 0..200 {
        let sa = a.tick();
        let sb = b.tick();
        assert_eq!(sa, sb);
    }
    for (ca, cb) in a.cells().iter().zip(b.cells()) {
        assert_eq!(ca.position, cb.position);
    }
}
