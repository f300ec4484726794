//! External force fields biasing cell motion.
//!
//! Force fields are applied once per cell per step, in configuration order,
//! and their displacements are added directly to the cell's position
//! (semi-implicit Euler with no retained velocity state).

use glam::Vec2;

/// A displacement source evaluated per cell per step.
///
/// # Example
///
/// ```
/// use cpde::ForceField;
/// use glam::Vec2;
///
/// // Chemotaxis-style attraction toward (10, 10).
/// let chemo = ForceField::Attract {
///     target: Vec2::new(10.0, 10.0),
///     intensity: 2.0,
/// };
///
/// let dx = chemo.displacement(Vec2::new(20.0, 10.0), 0.1);
/// assert_eq!(dx, Vec2::new(-2.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceField {
    /// Pull every cell toward a fixed target point.
    ///
    /// The displacement is `intensity * (target − position) * dt`, so cells
    /// move toward the target. A negative intensity inverts the sign and
    /// gives the drift-away behavior — the sign is a configuration choice,
    /// not a law of the system.
    Attract {
        /// Target position.
        target: Vec2,
        /// Attraction strength; negative repels.
        intensity: f32,
    },

    /// Constant drift in a fixed direction.
    ///
    /// The displacement is `velocity * dt`, independent of position.
    /// Useful for wind, currents, or a steady fall.
    Drift(Vec2),
}

impl ForceField {
    /// Displacement contributed to a cell at `position` over a step of
    /// length `dt`. Pure function of its inputs.
    pub fn displacement(&self, position: Vec2, dt: f32) -> Vec2 {
        match self {
            ForceField::Attract { target, intensity } => (*target - position) * (*intensity * dt),
            ForceField::Drift(velocity) => *velocity * dt,
        }
    }
}
