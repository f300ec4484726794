//! # CPDE - Cell Projection Dynamics Engine
//!
//! Projection-based 2D particle simulations with a simple, declarative API.
//!
//! CPDE moves circular "cells" under configurable force fields and resolves
//! overlap — cell against cell, cell against static obstacles, cell against
//! the domain walls — by geometric projection: each constraint displaces a
//! cell just far enough to remove the penetration. One fixed-order pass per
//! frame, no velocity state, no convergence loop; residual overlap simply
//! shrinks over successive frames.
//!
//! ## Quick Start
//!
//! ```
//! use cpde::prelude::*;
//!
//! let mut world = Simulation::new()
//!     .with_cell_count(30)
//!     .with_cell_radius(2.0)
//!     .with_domain(100.0, 100.0)
//!     .with_force(ForceField::Attract {
//!         target: Vec2::new(10.0, 10.0),
//!         intensity: 2.0,
//!     })
//!     .with_segment(Vec2::new(10.0, 10.0), Vec2::new(40.0, 40.0))
//!     .build()
//!     .expect("valid configuration");
//!
//! for _ in 0..100 {
//!     world.tick();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Cells
//!
//! A cell is a circle with a position and a fixed radius. Cells keep their
//! insertion order, so identically configured runs replay identically.
//!
//! ### Force fields
//!
//! [`ForceField`]s displace every cell once per step — chemotaxis-style
//! attraction toward a target, or a constant drift. Displacements are added
//! directly to position (one explicit Euler step, no retained velocity).
//!
//! ### Constraints
//!
//! Every step runs the same pipeline in the same order:
//!
//! 1. force fields,
//! 2. pairwise circle-circle resolution over all pairs,
//! 3. projection out of [`Segment`]s (body plus two end caps) and
//!    [`HalfPlane`]s,
//! 4. the hard [`Domain`] clamp, which always wins.
//!
//! [`World::step`] reports what it did through a [`StepSummary`].
//!
//! ### Interaction
//!
//! Hosts with pointer input can pick up and drag cells between frames with
//! [`World::select_nearest`], [`World::drag_selected`], and
//! [`World::release_selected`]; the solver treats the held cell like any
//! other. Coordinate mapping from screen to world stays on the host's side.
//!
//! Rendering is likewise external: [`World::cells`], [`World::segments`],
//! and [`World::half_planes`] expose everything a renderer needs.

pub mod cell;
pub mod collision;
pub mod error;
pub mod forces;
pub mod math;
pub mod obstacle;
pub mod selection;
mod simulation;
pub mod spawn;
pub mod time;

pub use cell::Cell;
pub use collision::{resolve_pair, Domain};
pub use error::ConfigError;
pub use forces::ForceField;
pub use glam::Vec2;
pub use obstacle::{HalfPlane, Segment};
pub use simulation::{Simulation, StepSummary, World};
pub use spawn::SpawnContext;

/// Convenient re-exports for common usage.
///
/// ```
/// use cpde::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cell::Cell;
    pub use crate::collision::Domain;
    pub use crate::error::ConfigError;
    pub use crate::forces::ForceField;
    pub use crate::obstacle::{HalfPlane, Segment};
    pub use crate::simulation::{Simulation, StepSummary, World};
    pub use crate::spawn::SpawnContext;
    pub use crate::time::Time;
    pub use crate::Vec2;
}
