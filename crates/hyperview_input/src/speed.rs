//! Rotation speed setting as offered by the viewer controls
//!
//! The controls move the speed in steps of 0.1 between 0.0 and 3.0. Holding
//! the value as a count of tenths keeps every step exact. This constraint is
//! a property of the controls only; the pipeline accepts any speed.

/// Speed multiplier in the range `0.0..=3.0`, step `0.1`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedSetting {
    tenths: u8,
}

impl Default for SpeedSetting {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SpeedSetting {
    pub const MIN: Self = Self { tenths: 0 };
    pub const MAX: Self = Self { tenths: 30 };
    pub const DEFAULT: Self = Self { tenths: 10 };
    pub const STEP: f32 = 0.1;

    /// Nearest setting to `multiplier`, clamped to the allowed range
    ///
    /// NaN maps to the default.
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier.is_nan() {
            return Self::DEFAULT;
        }
        let tenths = (multiplier * 10.0).round().clamp(0.0, Self::MAX.tenths as f32);
        Self { tenths: tenths as u8 }
    }

    /// The multiplier handed to the pipeline
    #[inline]
    pub fn multiplier(self) -> f32 {
        self.tenths as f32 / 10.0
    }

    /// One step faster, saturating at the maximum
    pub fn increase(self) -> Self {
        Self { tenths: (self.tenths + 1).min(Self::MAX.tenths) }
    }

    /// One step slower, saturating at zero
    pub fn decrease(self) -> Self {
        Self { tenths: self.tenths.saturating_sub(1) }
    }

    pub fn is_stopped(self) -> bool {
        self.tenths == 0
    }
}

impl std::fmt::Display for SpeedSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}x", self.multiplier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unit_speed() {
        assert_eq!(SpeedSetting::default().multiplier(), 1.0);
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(SpeedSetting::MIN.multiplier(), 0.0);
        assert_eq!(SpeedSetting::MAX.multiplier(), 3.0);
        assert_eq!(SpeedSetting::MAX.increase(), SpeedSetting::MAX);
        assert_eq!(SpeedSetting::MIN.decrease(), SpeedSetting::MIN);
    }

    #[test]
    fn test_steps_are_exact() {
        let mut s = SpeedSetting::MIN;
        for i in 0..=30 {
            assert_eq!(s.multiplier(), i as f32 / 10.0);
            s = s.increase();
        }
        assert_eq!(s, SpeedSetting::MAX);
    }

    #[test]
    fn test_from_multiplier_rounds_and_clamps() {
        assert_eq!(SpeedSetting::from_multiplier(1.04).multiplier(), 1.0);
        assert_eq!(SpeedSetting::from_multiplier(1.26).multiplier(), 1.3);
        assert_eq!(SpeedSetting::from_multiplier(-2.0), SpeedSetting::MIN);
        assert_eq!(SpeedSetting::from_multiplier(99.0), SpeedSetting::MAX);
        assert_eq!(SpeedSetting::from_multiplier(f32::NAN), SpeedSetting::DEFAULT);
    }

    #[test]
    fn test_display() {
        assert_eq!(SpeedSetting::DEFAULT.to_string(), "1.0x");
        assert_eq!(SpeedSetting::from_multiplier(2.5).to_string(), "2.5x");
    }

    #[test]
    fn test_is_stopped() {
        assert!(SpeedSetting::MIN.is_stopped());
        assert!(!SpeedSetting::DEFAULT.is_stopped());
    }
}
