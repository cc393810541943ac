use thiserror::Error;

/// Errors reported when a slider range is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SliderConfigError {
    /// `minimum` is not below `maximum`.
    #[error("slider minimum {minimum} must be below maximum {maximum}")]
    InvalidRange {
        /// Requested minimum.
        minimum: f32,
        /// Requested maximum.
        maximum: f32,
    },
    /// `step` is negative.
    #[error("slider step {0} must not be negative")]
    NegativeStep(f32),
    /// A bound, the step or the span between the bounds is NaN or
    /// infinite.
    #[error("slider bounds, step and range must be finite")]
    NonFinite,
}

/// Validated value range of a slider.
///
/// Maps between values and thumb positions along a track measured in px.
/// A `step` of zero means continuous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    minimum: f32,
    maximum: f32,
    step: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 100.0,
            step: 1.0,
        }
    }
}

impl SliderConfig {
    /// Validates and creates a range.
    pub fn new(minimum: f32, maximum: f32, step: f32) -> Result<Self, SliderConfigError> {
        if !(minimum.is_finite() && maximum.is_finite() && step.is_finite()) {
            return Err(SliderConfigError::NonFinite);
        }
        if minimum >= maximum {
            return Err(SliderConfigError::InvalidRange { minimum, maximum });
        }
        if !(maximum - minimum).is_finite() {
            return Err(SliderConfigError::NonFinite);
        }
        if step < 0.0 {
            return Err(SliderConfigError::NegativeStep(step));
        }
        Ok(Self {
            minimum,
            maximum,
            step,
        })
    }

    /// A continuous range.
    pub fn continuous(minimum: f32, maximum: f32) -> Result<Self, SliderConfigError> {
        Self::new(minimum, maximum, 0.0)
    }

    /// Lower bound.
    pub fn minimum(&self) -> f32 {
        self.minimum
    }

    /// Upper bound.
    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    /// Step size, zero when continuous.
    pub fn step(&self) -> f32 {
        self.step
    }

    fn range(&self) -> f32 {
        self.maximum - self.minimum
    }

    /// Clamps into `[minimum, maximum]`. NaN maps to `minimum`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.minimum;
        }
        value.clamp(self.minimum, self.maximum)
    }

    /// Rounds to the nearest step offset from `minimum`, clamps, and rounds
    /// to two decimal places.
    ///
    /// The arithmetic runs in `f64` so large offsets still land on a step.
    pub fn snap(&self, value: f32) -> f32 {
        let value = f64::from(self.clamp(value));
        let minimum = f64::from(self.minimum);
        let step = f64::from(self.step);
        let stepped = if step > 0.0 {
            minimum + ((value - minimum) / step).round() * step
        } else {
            value
        };
        let rounded = (stepped * 100.0).round() / 100.0;
        self.clamp(rounded as f32)
    }

    /// Thumb offset in px for `value` on a track `track_length` px long.
    pub fn position_from_value(&self, value: f32, track_length: f32) -> f32 {
        if track_length <= 0.0 {
            return 0.0;
        }
        let offset = f64::from(self.clamp(value)) - f64::from(self.minimum);
        let span = f64::from(self.maximum) - f64::from(self.minimum);
        (offset / span * f64::from(track_length)) as f32
    }

    /// Snapped value for a thumb offset. Offsets outside the track clamp to
    /// the bounds; a zero-length track maps everything to `minimum`.
    pub fn value_from_position(&self, position: f32, track_length: f32) -> f32 {
        if track_length <= 0.0 {
            return self.minimum;
        }
        let fraction = (position / track_length).clamp(0.0, 1.0);
        self.snap(self.minimum + fraction * self.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_ranges() {
        assert_eq!(
            SliderConfig::new(10.0, 10.0, 1.0),
            Err(SliderConfigError::InvalidRange {
                minimum: 10.0,
                maximum: 10.0
            })
        );
        assert_eq!(
            SliderConfig::new(0.0, 1.0, -0.5),
            Err(SliderConfigError::NegativeStep(-0.5))
        );
        assert_eq!(
            SliderConfig::new(0.0, f32::INFINITY, 1.0),
            Err(SliderConfigError::NonFinite)
        );
        assert_eq!(
            SliderConfig::continuous(-3.0e38, 3.0e38),
            Err(SliderConfigError::NonFinite)
        );
    }

    #[test]
    fn widest_accepted_range_keeps_positions_finite() {
        let config = SliderConfig::continuous(-1.5e38, 1.5e38).unwrap();
        for value in [-1.5e38, 0.0, 1.5e38] {
            let position = config.position_from_value(value, 200.0);
            assert!(position.is_finite() && (0.0..=200.0).contains(&position));
        }
    }

    #[test]
    fn large_offsets_still_land_on_steps() {
        let config = SliderConfig::new(1.0e6, 1.0e6 + 100.0, 25.0).unwrap();
        let steps = [1.0e6, 1_000_025.0, 1_000_050.0, 1_000_075.0, 1_000_100.0];
        for px in 0..=200 {
            let value = config.value_from_position(px as f32, 200.0);
            assert!(steps.contains(&value), "{px}px mapped to {value}");
        }
    }

    #[test]
    fn step_rounding_is_offset_from_minimum() {
        let config = SliderConfig::new(3.0, 23.0, 5.0).unwrap();
        assert_eq!(config.snap(9.0), 8.0);
        assert_eq!(config.snap(11.0), 13.0);
        assert_eq!(config.snap(100.0), 23.0);
    }

    #[test]
    fn every_position_maps_onto_a_step() {
        let config = SliderConfig::new(0.0, 100.0, 25.0).unwrap();
        for px in -50..=250 {
            let value = config.value_from_position(px as f32, 200.0);
            assert!(
                [0.0, 25.0, 50.0, 75.0, 100.0].contains(&value),
                "{px}px mapped to {value}"
            );
        }
    }

    #[test]
    fn positions_outside_track_are_clamped() {
        let config = SliderConfig::continuous(-1.0, 1.0).unwrap();
        assert_eq!(config.value_from_position(-10.0, 100.0), -1.0);
        assert_eq!(config.value_from_position(1e6, 100.0), 1.0);
    }

    #[test]
    fn value_position_round_trip_is_stable() {
        let config = SliderConfig::continuous(0.0, 100.0).unwrap();
        let track = 237.0;
        for i in 0..=100 {
            let value = i as f32;
            let position = config.position_from_value(value, track);
            let again =
                config.position_from_value(config.value_from_position(position, track), track);
            assert!((position - again).abs() < 0.05, "{value}: {position} vs {again}");
        }
    }

    #[test]
    fn zero_length_track_never_divides() {
        let config = SliderConfig::default();
        assert_eq!(config.position_from_value(50.0, 0.0), 0.0);
        assert_eq!(config.value_from_position(10.0, 0.0), 0.0);
    }

    #[test]
    fn continuous_values_round_to_hundredths() {
        let config = SliderConfig::continuous(0.0, 1.0).unwrap();
        assert_eq!(config.value_from_position(1.0, 3.0), 0.33);
    }
}
