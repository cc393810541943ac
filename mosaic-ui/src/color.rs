//! RGBA colors and hex parsing.
//!
//! Channels are stored as straight (non-premultiplied) sRGB floats in
//! `0.0..=1.0`.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors produced when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string did not start with `#`.
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    /// The number of hex digits is not 3, 6 or 8.
    #[error("color `{input}` has {digits} hex digits, expected 3, 6 or 8")]
    InvalidLength {
        /// The rejected input.
        input: String,
        /// Number of digits found after `#`.
        digits: usize,
    },
    /// A character is not a hex digit.
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

/// An RGBA color.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from float channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from float channels.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Creates a color from 8-bit channels.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))
        };
        match digits.len() {
            3 => {
                let nibble = |i: usize| byte(i..i + 1).map(|v| v * 17);
                Ok(Self::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Self::from_rgb8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Self::from_rgba8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            len => Err(ColorParseError::InvalidLength {
                input: input.to_string(),
                digits: len,
            }),
        }
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Composites `overlay` at `alpha` over this color.
    pub fn blend_over(self, overlay: Color, alpha: f32) -> Color {
        let t = alpha.clamp(0.0, 1.0);
        Color::new(
            self.r + (overlay.r - self.r) * t,
            self.g + (overlay.g - self.g) * t,
            self.b + (overlay.b - self.b) * t,
            self.a + (overlay.a - self.a) * t,
        )
    }

    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
    pub fn to_hex(self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        );
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let color = Color::from_hex("#007AFF").unwrap();
        assert_eq!(color, Color::from_rgb8(0x00, 0x7A, 0xFF));
        assert_eq!(color.to_hex(), "#007AFF");
    }

    #[test]
    fn parses_short_and_alpha_forms() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        let translucent = Color::from_hex("#00000066").unwrap();
        assert_eq!(translucent.to_hex(), "#00000066");
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            Color::from_hex("007AFF"),
            Err(ColorParseError::MissingHash("007AFF".into()))
        );
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(ColorParseError::InvalidLength { digits: 5, .. })
        ));
        assert!(matches!(
            Color::from_hex("#GG0000"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn blend_over_interpolates_channels() {
        let mixed = Color::BLACK.blend_over(Color::WHITE, 0.5);
        assert!((mixed.r - 0.5).abs() < 1e-6);
        assert_eq!(mixed.a, 1.0);
    }
}
