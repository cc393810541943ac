//! Physical pixel values reported by the host.
//!
//! Layout measurements and gesture deltas arrive in physical pixels. [`Px`]
//! is the integral form used for sizes and positions. Sub-pixel gesture data
//! stays in `f32`.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::dp::{Dp, scale_factor};

/// A physical pixel value. Negative values are allowed for off-screen
/// positions.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px`.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts from dp using the global scale factor.
    pub fn from_dp(dp: Dp) -> Self {
        Px::saturating_from_f32(dp.to_pixels_f32())
    }

    /// Converts to dp using the global scale factor.
    pub fn to_dp(self) -> Dp {
        Dp(self.0 as f64 / scale_factor())
    }

    /// Returns the value as `f32`.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Converts an `f32`, truncating toward zero and saturating at the `i32`
    /// bounds.
    pub fn saturating_from_f32(value: f32) -> Self {
        if value.is_nan() {
            return Px::ZERO;
        }
        Px(value.clamp(i32::MIN as f32, i32::MAX as f32) as i32)
    }

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Px) -> Px {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, rhs: Px) -> Px {
        Px(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Px) -> Px {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Px) -> Px {
        Px(self.0 - rhs.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Px) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Px) {
        self.0 -= rhs.0;
    }
}

/// A 2D position in physical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// Horizontal coordinate.
    pub x: Px,
    /// Vertical coordinate.
    pub y: Px,
}

impl PxPosition {
    /// The origin.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
    };

    /// Creates a new position.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns this position moved by the given offsets.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A 2D size in physical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// Width.
    pub width: Px,
    /// Height.
    pub height: Px,
}

impl PxSize {
    /// Creates a new size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_from_f32() {
        assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f32(100.5), Px(100));
        assert_eq!(Px::saturating_from_f32(-100.5), Px(-100));
        assert_eq!(Px::saturating_from_f32(f32::NAN), Px::ZERO);
    }

    #[test]
    fn test_px_position_offset() {
        let pos = PxPosition::new(Px(10), Px(-5));
        assert_eq!(pos.offset(Px(2), Px(3)), PxPosition::new(Px(12), Px(-2)));
    }

    #[test]
    fn test_px_saturating_arithmetic() {
        assert_eq!(Px(i32::MAX).saturating_add(Px(1)), Px(i32::MAX));
        assert_eq!(Px(i32::MIN).saturating_sub(Px(1)), Px(i32::MIN));
    }
}
