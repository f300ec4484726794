//! Pointer-driven cell selection and dragging.
//!
//! The input collaborator maps device coordinates to world coordinates on
//! its side; everything here speaks world units. A typical pointer session:
//!
//! ```
//! use cpde::prelude::*;
//!
//! let mut world = Simulation::new()
//!     .with_cell_count(0)
//!     .with_cell(Vec2::new(50.0, 50.0), 2.0)
//!     .with_drag_radius(3.0)
//!     .build()
//!     .unwrap();
//!
//! // press: pick the nearest cell within twice its radius
//! let picked = world.select_nearest(Vec2::new(51.0, 50.0), 4.0);
//! assert_eq!(picked, Some(0));
//! assert_eq!(world.effective_radius(0), 3.0);
//!
//! // move: reposition the held cell between frames
//! world.drag_selected(Vec2::new(60.0, 40.0));
//! world.tick();
//!
//! // release: the override is gone
//! world.release_selected();
//! assert_eq!(world.effective_radius(0), 2.0);
//! ```
//!
//! Selection state only changes between frames; a step never observes a
//! half-applied drag.

use glam::Vec2;

use crate::simulation::World;

impl World {
    /// Select the cell nearest to `point`, among those within `max_radius`
    /// of it. Returns the selected index, or `None` (clearing any previous
    /// selection) when no cell is in range.
    ///
    /// While a cell is selected and a drag radius is configured
    /// ([`Simulation::with_drag_radius`](crate::Simulation::with_drag_radius)),
    /// the cell collides at that radius instead of its own.
    pub fn select_nearest(&mut self, point: Vec2, max_radius: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, cell) in self.cells().iter().enumerate() {
            let d = (cell.position - point).length();
            if d < max_radius && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        self.selected = best.map(|(i, _)| i);
        self.selected
    }

    /// Move the selected cell to `point`. No-op without a selection.
    ///
    /// Call between frames only; the next [`step`](World::step) projects
    /// the dragged cell out of anything it was dropped into.
    pub fn drag_selected(&mut self, point: Vec2) {
        if let Some(index) = self.selected {
            self.cell_mut(index).position = point;
        }
    }

    /// Release the current selection, restoring the cell's physical radius.
    pub fn release_selected(&mut self) {
        self.selected = None;
    }

    /// Index of the currently selected cell, if any.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}
