//! Pairwise circle-circle resolution and the hard domain clamp.

use glam::Vec2;

use crate::error::ConfigError;
use crate::math::normalize_or_fallback;

/// Resolve overlap between two circles.
///
/// Returns the displacements to apply to each circle, or `None` when the
/// circles are separated (`dist > ra + rb`) — the common case, and a cheap
/// short-circuit.
///
/// When overlapping, the correction is split symmetrically: each circle
/// moves by half the overlap in opposite directions along the center line,
/// so the resolved pair sits at exactly `ra + rb` apart. Coincident centers
/// have no separation direction and split along the fixed fallback axis.
pub fn resolve_pair(pa: Vec2, ra: f32, pb: Vec2, rb: f32) -> Option<(Vec2, Vec2)> {
    let delta = pb - pa;
    let dist = delta.length();
    if dist > ra + rb {
        return None;
    }

    let n = normalize_or_fallback(delta);
    let half = 0.5 * (dist - ra - rb); // <= 0 while overlapping
    Some((n * half, -(n * half)))
}

/// The rectangular simulation domain.
///
/// [`Domain::clamp`] is the hard backstop of the constraint pipeline: it
/// runs after every soft projection and always wins. A cell of radius `r`
/// is confined to `[r + left_margin, width − r] × [r, height − r]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    width: f32,
    height: f32,
    left_margin: f32,
}

impl Domain {
    /// Create a domain of the given extent with no left margin.
    ///
    /// Returns [`ConfigError::InvalidDomain`] for non-positive or
    /// non-finite extents.
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidDomain { width, height });
        }
        Ok(Self {
            width,
            height,
            left_margin: 0.0,
        })
    }

    /// Offset the left wall inward, shrinking the usable area.
    pub fn with_left_margin(mut self, margin: f32) -> Self {
        self.left_margin = margin;
        self
    }

    /// Domain width in world units.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Domain height in world units.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Inward offset of the left wall.
    #[inline]
    pub fn left_margin(&self) -> f32 {
        self.left_margin
    }

    /// `true` when a cell of the given radius fits inside the domain.
    pub fn fits(&self, radius: f32) -> bool {
        radius + self.left_margin <= self.width - radius && radius <= self.height - radius
    }

    /// Clamp a circle's center into the domain.
    ///
    /// The lower bound is applied last, so for a circle too large to fit it
    /// wins over the upper bound rather than panicking on an inverted
    /// range.
    pub fn clamp(&self, position: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            position
                .x
                .min(self.width - radius)
                .max(radius + self.left_margin),
            position.y.min(self.height - radius).max(radius),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_separated_pair_is_noop() {
        assert_eq!(
            resolve_pair(Vec2::ZERO, 2.0, Vec2::new(10.0, 0.0), 2.0),
            None
        );
    }

    #[test]
    fn test_touching_pair_has_zero_correction() {
        // dist == ra + rb is not a short-circuit, but the correction is zero.
        let (da, db) = resolve_pair(Vec2::ZERO, 2.0, Vec2::new(4.0, 0.0), 2.0).unwrap();
        assert!(da.length() < EPS);
        assert!(db.length() < EPS);
    }

    #[test]
    fn test_overlapping_pair_separates_to_radius_sum() {
        let (pa, ra) = (Vec2::ZERO, 2.0);
        let (pb, rb) = (Vec2::new(1.0, 0.0), 2.0);
        let (da, db) = resolve_pair(pa, ra, pb, rb).unwrap();

        let (pa, pb) = (pa + da, pb + db);
        assert!(((pb - pa).length() - (ra + rb)).abs() < EPS);

        // Symmetric split: each cell moved half the overlap (1.5).
        assert!((da - Vec2::new(-1.5, 0.0)).length() < EPS);
        assert!((db - Vec2::new(1.5, 0.0)).length() < EPS);
    }

    #[test]
    fn test_coincident_centers_split_along_fallback() {
        let p = Vec2::new(3.0, 3.0);
        let (da, db) = resolve_pair(p, 1.0, p, 1.0).unwrap();
        // Overlap is the full radius sum; each circle takes half of it
        // along the +X fallback axis.
        assert!((da - Vec2::new(-1.0, 0.0)).length() < EPS);
        assert!((db - Vec2::new(1.0, 0.0)).length() < EPS);
        assert!(((p + db - (p + da)).length() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_domain_rejects_bad_extent() {
        assert!(Domain::new(0.0, 100.0).is_err());
        assert!(Domain::new(100.0, -5.0).is_err());
        assert!(Domain::new(f32::NAN, 100.0).is_err());
    }

    #[test]
    fn test_clamp_inside_is_identity() {
        let d = Domain::new(100.0, 100.0).unwrap();
        let p = Vec2::new(50.0, 50.0);
        assert_eq!(d.clamp(p, 2.0), p);
    }

    #[test]
    fn test_clamp_lands_exactly_on_boundary() {
        let d = Domain::new(100.0, 100.0).unwrap();
        let p = d.clamp(Vec2::new(150.0, -20.0), 2.0);
        assert_eq!(p, Vec2::new(98.0, 2.0));
    }

    #[test]
    fn test_clamp_honors_left_margin() {
        let d = Domain::new(100.0, 100.0).unwrap().with_left_margin(5.0);
        let p = d.clamp(Vec2::new(0.0, 50.0), 2.0);
        assert_eq!(p, Vec2::new(7.0, 50.0));
    }

    #[test]
    fn test_fits() {
        let d = Domain::new(100.0, 100.0).unwrap();
        assert!(d.fits(2.0));
        assert!(!d.fits(60.0));
    }
}
