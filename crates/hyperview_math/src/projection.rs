//! 4D → 3D perspective projection
//!
//! The viewer sits on the W axis at `w = distance` and looks back toward the
//! origin. A point is scaled by `distance / (distance - w)`, the one-dimension-up
//! analogue of a pinhole camera divide: points with larger w come out magnified.
//!
//! ## Numerical stability
//!
//! The scale diverges as `w` approaches `distance`. Rotations preserve vector
//! length, so a vertex of length `r` never has `|w| > r`. For the ±1 hypercube
//! `r = 2` and the default distance is 3, which keeps the denominator at or
//! above 1 in every reachable rotation state. Nothing checks this at runtime;
//! geometry that reaches `w >= distance` projects to infinite or flipped
//! coordinates.

use crate::{Vec3, Vec4};

/// Perspective projection from 4D to 3D along the W axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveProjection {
    /// Distance of the 4D viewpoint from the origin along W
    pub distance: f32,
}

impl Default for PerspectiveProjection {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PerspectiveProjection {
    /// Projection distance used by the tesseract viewer
    pub const DEFAULT_DISTANCE: f32 = 3.0;

    pub const DEFAULT: Self = Self::new(Self::DEFAULT_DISTANCE);

    pub const fn new(distance: f32) -> Self {
        Self { distance }
    }

    /// The divide's denominator for a point at `w`
    #[inline]
    pub fn denominator(&self, w: f32) -> f32 {
        self.distance - w
    }

    /// Scale factor applied to x, y and z for a point at `w`
    #[inline]
    pub fn scale(&self, w: f32) -> f32 {
        self.distance / self.denominator(w)
    }

    /// Project a 4D point, discarding w
    #[inline]
    pub fn project(&self, p: Vec4) -> Vec3 {
        let s = self.scale(p.w);
        Vec3::new(p.x * s, p.y * s, p.z * s)
    }

    /// Smallest denominator reachable by any rotation of a point of length `radius`
    ///
    /// Positive means the projection stays finite for that geometry.
    #[inline]
    pub fn min_denominator(&self, radius: f32) -> f32 {
        self.distance - radius
    }
}
