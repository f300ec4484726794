//! Static obstacles: finite line segments and infinite half-planes.
//!
//! Both obstacle types resolve overlap by *projection*: given a cell's
//! position and radius they return the smallest displacement that restores
//! the non-penetration condition, or `None` when the cell is clear. They
//! never move themselves — obstacles are immutable after construction, with
//! derived quantities (length, direction, normal) computed once.
//!
//! # Example
//!
//! ```
//! use cpde::{HalfPlane, Segment};
//! use glam::Vec2;
//!
//! let wall = Segment::new(Vec2::new(10.0, 10.0), Vec2::new(40.0, 40.0)).unwrap();
//! let floor = HalfPlane::new(Vec2::ZERO, Vec2::Y).unwrap();
//!
//! // A cell of radius 2 resting 1 unit above the floor gets pushed up by 1.
//! let push = floor.project(Vec2::new(5.0, 1.0), 2.0).unwrap();
//! assert_eq!(push, Vec2::new(0.0, 1.0));
//! # let _ = wall;
//! ```

use glam::Vec2;

use crate::error::ConfigError;
use crate::math::{normalize_or_fallback, perp_cw, DEGENERATE_EPSILON};

/// A finite line obstacle with two endpoints.
///
/// The derived unit `direction` runs A→B and the unit `normal` is the
/// direction rotated −90°. Cells collide with the segment body along the
/// normal and with the two endpoints as points (end caps).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    a: Vec2,
    b: Vec2,
    length: f32,
    direction: Vec2,
    normal: Vec2,
}

impl Segment {
    /// Create a segment from two distinct endpoints.
    ///
    /// Returns [`ConfigError::DegenerateSegment`] when the endpoints
    /// coincide (no direction or normal can be derived).
    pub fn new(a: Vec2, b: Vec2) -> Result<Self, ConfigError> {
        let v = b - a;
        let length = v.length();
        if !length.is_finite() || length <= DEGENERATE_EPSILON {
            return Err(ConfigError::DegenerateSegment);
        }
        let direction = v / length;
        Ok(Self {
            a,
            b,
            length,
            direction,
            normal: perp_cw(direction),
        })
    }

    /// First endpoint.
    #[inline]
    pub fn a(&self) -> Vec2 {
        self.a
    }

    /// Second endpoint.
    #[inline]
    pub fn b(&self) -> Vec2 {
        self.b
    }

    /// Distance between the endpoints.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Unit vector from A to B.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Unit normal (direction rotated −90°).
    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Displacement that moves a circle out of the segment, or `None` when
    /// the circle is clear.
    ///
    /// The circle's center is decomposed into a tangential coordinate `ca`
    /// (distance along the segment from A) and a normal coordinate `cn`.
    /// Three regions dispatch on `ca`, with strict comparisons so that a
    /// center exactly over an endpoint takes the body branch:
    ///
    /// - `ca < 0`: collide with endpoint A as a point,
    /// - `ca > length`: collide with endpoint B as a point,
    /// - otherwise: push along the normal, away from the line, on the side
    ///   the center already occupies.
    ///
    /// A center exactly on an endpoint has no separation direction and is
    /// pushed along the fixed fallback axis.
    pub fn project(&self, position: Vec2, radius: f32) -> Option<Vec2> {
        let w = position - self.a;
        let ca = w.dot(self.direction);
        let cn = w.dot(self.normal);

        // Farther from the infinite line than the radius: clear. |cn| never
        // exceeds the distance to either endpoint, so this also covers the
        // cap regions.
        if cn.abs() > radius {
            return None;
        }

        if ca < 0.0 {
            project_point(self.a, position, radius)
        } else if ca > self.length {
            project_point(self.b, position, radius)
        } else {
            let push = if cn > 0.0 { radius - cn } else { -radius - cn };
            Some(self.normal * push)
        }
    }
}

/// Circle-vs-point projection shared by the two end caps.
fn project_point(point: Vec2, position: Vec2, radius: f32) -> Option<Vec2> {
    let w = position - point;
    let d = w.length();
    if d > radius {
        return None;
    }
    Some(normalize_or_fallback(w) * (radius - d))
}

/// An infinite straight boundary defined by an anchor and an inward normal.
///
/// The allowed region for a circle of radius `r` is
/// `{ x : (x − anchor) · normal ≥ r }`. Four half-planes form a rectangular
/// containment as a soft alternative to the hard clamp in
/// [`Domain`](crate::Domain).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    anchor: Vec2,
    normal: Vec2,
}

impl HalfPlane {
    /// Create a half-plane from an anchor point and an inward-pointing
    /// normal. The normal is normalized here; a (near-)zero normal is a
    /// [`ConfigError::ZeroNormal`].
    pub fn new(anchor: Vec2, normal: Vec2) -> Result<Self, ConfigError> {
        let len = normal.length();
        if !len.is_finite() || len <= DEGENERATE_EPSILON {
            return Err(ConfigError::ZeroNormal);
        }
        Ok(Self {
            anchor,
            normal: normal / len,
        })
    }

    /// Anchor point on the boundary line.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Unit normal pointing into the allowed region.
    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Displacement that moves a circle into the allowed region, or `None`
    /// when the circle already satisfies `(position − anchor) · normal ≥
    /// radius`.
    pub fn project(&self, position: Vec2, radius: f32) -> Option<Vec2> {
        let cn = (position - self.anchor).dot(self.normal);
        if cn < radius {
            Some(self.normal * (radius - cn))
        } else {
            None
        }
    }
}
