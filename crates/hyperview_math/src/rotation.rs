//! Plane rotations in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes. The viewer
//! only turns the tesseract through the three planes that involve W, so
//! only those are modelled here. Each one mixes a single spatial axis with W
//! and leaves the other two axes fixed.

use crate::Vec4;

/// The three W-involving rotation planes, in the order the pipeline applies them
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane {
    /// XW plane - mixes X with W
    XW,
    /// YW plane - mixes Y with W
    YW,
    /// ZW plane - mixes Z with W
    ZW,
}

impl RotationPlane {
    /// All planes in application order
    pub const ALL: [RotationPlane; 3] = [RotationPlane::XW, RotationPlane::YW, RotationPlane::ZW];

    /// Axis indices `(a, b)` spanning this plane (0 = X, 1 = Y, 2 = Z, 3 = W)
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XW => (0, 3),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Rotate `v` by `angle` radians in this plane
    #[inline]
    pub fn rotate(self, v: Vec4, angle: f32) -> Vec4 {
        PlaneRotation::new(self, angle).apply(v)
    }
}

/// A rotation by a fixed angle in one plane, with its sine and cosine
/// evaluated once so it can be applied to many vertices
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneRotation {
    pub plane: RotationPlane,
    pub angle: f32,
    cos: f32,
    sin: f32,
}

impl PlaneRotation {
    pub fn new(plane: RotationPlane, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { plane, angle, cos, sin }
    }

    /// Apply the rotation
    ///
    /// With `(a, b)` the plane's axes: `a' = a·cos − b·sin`, `b' = a·sin + b·cos`.
    #[inline]
    pub fn apply(&self, v: Vec4) -> Vec4 {
        let (c, s) = (self.cos, self.sin);
        match self.plane {
            RotationPlane::XW => Vec4::new(v.x * c - v.w * s, v.y, v.z, v.x * s + v.w * c),
            RotationPlane::YW => Vec4::new(v.x, v.y * c - v.w * s, v.z, v.y * s + v.w * c),
            RotationPlane::ZW => Vec4::new(v.x, v.y, v.z * c - v.w * s, v.z * s + v.w * c),
        }
    }
}
