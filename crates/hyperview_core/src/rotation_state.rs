//! Accumulated rotation angles
//!
//! Three angles, one per W-involving plane. Each advances at its own fixed
//! rate times the caller's speed multiplier, which gives every plane a
//! visibly different precession. Angles grow without wrapping.

use hyperview_math::{PlaneRotation, RotationPlane};

/// Radians per second per unit of speed, for each plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationRates {
    pub xw: f32,
    pub yw: f32,
    pub zw: f32,
}

impl RotationRates {
    /// The viewer's fixed relative rates
    pub const TESSERACT: Self = Self { xw: 0.5, yw: 0.3, zw: 0.2 };
}

/// Current angle (radians) in each rotation plane
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub xw: f32,
    pub yw: f32,
    pub zw: f32,
}

impl RotationState {
    pub const ZERO: Self = Self { xw: 0.0, yw: 0.0, zw: 0.0 };

    pub const fn new(xw: f32, yw: f32, zw: f32) -> Self {
        Self { xw, yw, zw }
    }

    /// Advance every angle by `elapsed_seconds * rate * speed`
    ///
    /// `speed` is not validated: zero freezes the rotation and a negative
    /// value runs it backwards.
    pub fn advance(&mut self, elapsed_seconds: f32, speed: f32) {
        let rates = RotationRates::TESSERACT;
        self.xw += elapsed_seconds * rates.xw * speed;
        self.yw += elapsed_seconds * rates.yw * speed;
        self.zw += elapsed_seconds * rates.zw * speed;
    }

    /// Angle for a given plane
    pub fn angle(&self, plane: RotationPlane) -> f32 {
        match plane {
            RotationPlane::XW => self.xw,
            RotationPlane::YW => self.yw,
            RotationPlane::ZW => self.zw,
        }
    }

    /// The three plane rotations in application order: XW, YW, ZW
    pub fn rotations(&self) -> [PlaneRotation; 3] {
        RotationPlane::ALL.map(|plane| PlaneRotation::new(plane, self.angle(plane)))
    }
}
