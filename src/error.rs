//! Error types for cpde.
//!
//! The only fallible operations are construction-time: building entities or
//! a world from caller-supplied parameters. The solver itself never fails —
//! degenerate geometry during a step resolves deterministically (see
//! [`crate::math::DEGENERATE_FALLBACK`]).

use std::fmt;

/// Errors reported when validating caller-supplied configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Cell radius must be strictly positive.
    NonPositiveRadius(f32),
    /// Segment endpoints coincide, leaving no direction or normal.
    DegenerateSegment,
    /// Half-plane normal has (near-)zero length.
    ZeroNormal,
    /// Domain cannot contain a cell of the configured radius.
    InvalidDomain {
        /// Configured domain width.
        width: f32,
        /// Configured domain height.
        height: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveRadius(r) => {
                write!(f, "Cell radius must be > 0, got {}", r)
            }
            ConfigError::DegenerateSegment => {
                write!(f, "Segment endpoints coincide; a segment needs two distinct points")
            }
            ConfigError::ZeroNormal => {
                write!(f, "Half-plane normal must have non-zero length")
            }
            ConfigError::InvalidDomain { width, height } => {
                write!(
                    f,
                    "Domain {}x{} is too small for the configured cells",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_offending_value() {
        let msg = ConfigError::NonPositiveRadius(-2.0).to_string();
        assert!(msg.contains("-2"));

        let msg = ConfigError::InvalidDomain {
            width: 3.0,
            height: 100.0,
        }
        .to_string();
        assert!(msg.contains("3"));
    }
}
