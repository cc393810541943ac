//! # Density-Independent Pixels (Dp)
//!
//! Component styles are written in [`Dp`]. The host reports layout and gesture
//! data in physical pixels, so conversions go through the global
//! [`SCALE_FACTOR`].
//!
//! ## Usage
//!
//! ```
//! use mosaic_ui::Dp;
//!
//! let padding = Dp(16.0);
//! let pixels = padding.to_pixels_f32();
//! let back = Dp::from_pixels_f32(pixels);
//! assert_eq!(back, padding);
//! ```

use std::{
    ops::{Add, Div, Mul, Neg, Sub},
    sync::OnceLock,
};

use parking_lot::RwLock;

use crate::Px;

/// Global scale factor for converting between dp and physical pixels.
///
/// The value is the number of physical pixels per dp. It defaults to `1.0`
/// until a host sets it, usually once at startup through
/// [`set_scale_factor`].
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global dp-to-pixel scale factor.
pub fn set_scale_factor(scale_factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = scale_factor;
}

/// Returns the current dp-to-pixel scale factor.
pub fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels.
///
/// A `Dp(48.0)` button is roughly the same physical size on a low-density
/// tablet and a high-density phone.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Dp(0.0);

    /// Creates a new `Dp`. Usable in const contexts.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts to physical pixels as `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Converts physical pixels to dp.
    pub fn from_pixels_f64(value: f64) -> Self {
        Dp(value / scale_factor())
    }

    /// Converts to physical pixels as `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Converts `f32` physical pixels to dp.
    pub fn from_pixels_f32(value: f32) -> Self {
        Dp(value as f64 / scale_factor())
    }

    /// Converts to a [`Px`] value, truncating toward zero.
    pub fn to_px(&self) -> Px {
        Px::saturating_from_f32(self.to_pixels_f32())
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Dp) -> Dp {
        Dp(self.0.max(other.0))
    }

    /// Returns the smaller of two values.
    pub fn min(self, other: Dp) -> Dp {
        Dp(self.0.min(other.0))
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

impl From<Px> for Dp {
    fn from(px: Px) -> Self {
        Dp::from_pixels_f64(px.0 as f64)
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f64) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Div<f64> for Dp {
    type Output = Dp;

    fn div(self, rhs: f64) -> Dp {
        Dp(self.0 / rhs)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Dp {
        Dp(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_arithmetic() {
        assert_eq!(Dp(10.0) + Dp(5.0), Dp(15.0));
        assert_eq!(Dp(10.0) - Dp(4.0), Dp(6.0));
        assert_eq!(Dp(12.0) * 0.5, Dp(6.0));
        assert_eq!(Dp(12.0) / 4.0, Dp(3.0));
        assert_eq!(-Dp(2.0), Dp(-2.0));
    }

    #[test]
    fn dp_min_max() {
        assert_eq!(Dp(3.0).max(Dp(7.0)), Dp(7.0));
        assert_eq!(Dp(3.0).min(Dp(7.0)), Dp(3.0));
    }
}
