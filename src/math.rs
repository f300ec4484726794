//! Vector helpers for the projection solver.
//!
//! [`glam::Vec2`] supplies the general 2D arithmetic (add, scale, dot,
//! length, rotation). This module adds the two pieces the solver needs on
//! top of it: a normalization that never produces NaN, and the perpendicular
//! used to derive segment normals.

use glam::Vec2;

/// Direction used when normalizing a (near-)zero vector.
///
/// Coincident points — two cells at the identical position, or a cell
/// exactly on a segment endpoint — have no meaningful separation direction.
/// Resolving them along a fixed axis keeps every step deterministic and
/// every frame renderable, so callers get this instead of an error.
pub const DEGENERATE_FALLBACK: Vec2 = Vec2::X;

/// Length below which a vector is treated as degenerate.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Unit vector of `v`, or [`DEGENERATE_FALLBACK`] when `v` is too short
/// to normalize.
#[inline]
pub fn normalize_or_fallback(v: Vec2) -> Vec2 {
    let len = v.length();
    if len > DEGENERATE_EPSILON {
        v / len
    } else {
        DEGENERATE_FALLBACK
    }
}

/// `v` rotated by −90°: `(v.y, -v.x)`.
///
/// Applied to a segment's unit direction this yields its unit normal.
#[inline]
pub fn perp_cw(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}
