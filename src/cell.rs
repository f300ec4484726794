//! The cell entity.

use glam::Vec2;

use crate::error::ConfigError;

/// A circular particle with a position and a fixed radius.
///
/// Position is mutated every step by the orchestrator and the constraint
/// resolvers. The radius is validated at construction and constant for the
/// life of the cell; the temporary enlargement while a cell is dragged is an
/// override held by [`World`](crate::World), not a mutation of the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Current position in world units.
    pub position: Vec2,
    radius: f32,
}

impl Cell {
    /// Create a cell at `position` with the given radius.
    ///
    /// Returns [`ConfigError::NonPositiveRadius`] for radii that are zero,
    /// negative, or non-finite.
    pub fn new(position: Vec2, radius: f32) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(radius));
        }
        Ok(Self { position, radius })
    }

    /// The cell's physical radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}
