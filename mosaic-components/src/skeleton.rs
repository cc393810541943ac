//! Placeholder blocks shown while content loads.
//!
//! ## Usage
//!
//! Use in place of text, avatars or media until the real content arrives.

use std::time::Duration;

use derive_setters::Setters;
use mosaic_ui::{
    AnimatedValue, AnimationHandle, Animator, DimensionValue, Dp, State, Style, ViewNode,
    animation::{looping, sequence, timing},
    frame_time, remember_with_key,
};
use tracing::trace;

use crate::theme::use_theme;

const PULSE_LEG: Duration = Duration::from_millis(800);
const DIM_OPACITY: f32 = 0.3;
const BRIGHT_OPACITY: f32 = 0.7;
const FALLBACK_CIRCLE: f64 = 50.0;

/// Shape of a skeleton block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonVariant {
    /// A text line: full width, 16 tall, radius 4.
    Text,
    /// A circle sized by `width`, then `height`, then 50.
    Circle,
    /// A block: full width, 50 tall, radius 8.
    #[default]
    Rectangle,
}

/// Arguments for [`skeleton`].
#[derive(Clone, PartialEq, Setters)]
pub struct SkeletonArgs {
    /// Dispatch key and controller key.
    #[setters(into)]
    pub key: String,
    /// Shape.
    pub variant: SkeletonVariant,
    /// Width override.
    #[setters(strip_option, into)]
    pub width: Option<DimensionValue>,
    /// Height override.
    #[setters(strip_option, into)]
    pub height: Option<DimensionValue>,
    /// Extra style, applied last.
    pub style: Style,
    /// Pulse the opacity.
    pub animated: bool,
    /// Optional external controller.
    #[setters(skip)]
    pub controller: Option<State<SkeletonController>>,
}

impl Default for SkeletonArgs {
    fn default() -> Self {
        Self {
            key: "skeleton".to_string(),
            variant: SkeletonVariant::default(),
            width: None,
            height: None,
            style: Style::default(),
            animated: true,
            controller: None,
        }
    }
}

impl SkeletonArgs {
    /// Uses an external controller.
    pub fn controller(mut self, controller: State<SkeletonController>) -> Self {
        self.controller = Some(controller);
        self
    }

    fn variant_style(&self) -> Style {
        match self.variant {
            SkeletonVariant::Circle => {
                let size = circle_size(self.width, self.height);
                Style::new().size(size, size).border_radius(size / 2.0)
            }
            SkeletonVariant::Text => Style::new()
                .width(self.width.unwrap_or(DimensionValue::FULL))
                .height(self.height.unwrap_or(DimensionValue::Fixed(Dp(16.0))))
                .border_radius(Dp(4.0)),
            SkeletonVariant::Rectangle => Style::new()
                .width(self.width.unwrap_or(DimensionValue::FULL))
                .height(self.height.unwrap_or(DimensionValue::Fixed(Dp(50.0))))
                .border_radius(Dp(8.0)),
        }
    }
}

fn circle_size(width: Option<DimensionValue>, height: Option<DimensionValue>) -> Dp {
    let fixed = |d: Option<DimensionValue>| d.and_then(DimensionValue::fixed).filter(|dp| dp.0 > 0.0);
    match width {
        Some(DimensionValue::Percent(_)) => Dp(FALLBACK_CIRCLE),
        _ => fixed(width)
            .or_else(|| fixed(height))
            .unwrap_or(Dp(FALLBACK_CIRCLE)),
    }
}

/// Opacity pulse of a skeleton.
#[derive(Debug)]
pub struct SkeletonController {
    opacity: AnimatedValue,
    animator: Animator,
    pulse: Option<AnimationHandle>,
}

impl Default for SkeletonController {
    fn default() -> Self {
        Self {
            opacity: AnimatedValue::new(DIM_OPACITY),
            animator: Animator::new(),
            pulse: None,
        }
    }
}

impl SkeletonController {
    /// Creates a controller at the dim opacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }

    /// Whether the pulse is running.
    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_some()
    }

    /// Starts or stops the pulse to match `animated` and advances it to `now`.
    pub fn sync(&mut self, animated: bool, now: Duration) {
        match (animated, self.pulse) {
            (true, None) => {
                self.pulse = Some(self.animator.start(
                    looping(sequence([
                        timing(&self.opacity, BRIGHT_OPACITY, PULSE_LEG),
                        timing(&self.opacity, DIM_OPACITY, PULSE_LEG),
                    ])),
                    now,
                ));
                trace!("skeleton pulse started");
            }
            (false, Some(handle)) => {
                self.animator.stop(handle);
                self.pulse = None;
                self.opacity.set(DIM_OPACITY);
                trace!("skeleton pulse stopped");
            }
            _ => {}
        }
        self.animator.tick(now);
    }
}

/// Renders a skeleton block.
pub fn skeleton(args: &SkeletonArgs) -> ViewNode {
    let controller = args
        .controller
        .clone()
        .unwrap_or_else(|| remember_with_key(&args.key, SkeletonController::new));
    let opacity = controller.with_mut(|c| {
        c.sync(args.animated, frame_time());
        c.opacity()
    });
    let colors = use_theme().colors;

    ViewNode::view().key(args.key.clone()).style(
        Style::new()
            .overflow_hidden(true)
            .merge(&args.variant_style())
            .background(colors.border)
            .opacity(opacity)
            .merge(&args.style),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn circle_size_prefers_numeric_width() {
        assert_eq!(circle_size(Some(Dp(30.0).into()), Some(Dp(80.0).into())), Dp(30.0));
        assert_eq!(circle_size(None, Some(Dp(80.0).into())), Dp(80.0));
        assert_eq!(circle_size(Some(DimensionValue::Percent(40.0)), Some(Dp(80.0).into())), Dp(50.0));
        assert_eq!(circle_size(None, None), Dp(50.0));
    }

    #[test]
    fn variants_fill_in_defaults() {
        let text = SkeletonArgs::default().variant(SkeletonVariant::Text).variant_style();
        assert_eq!(text.width, Some(DimensionValue::FULL));
        assert_eq!(text.height, Some(DimensionValue::Fixed(Dp(16.0))));
        assert_eq!(text.border_radius, Some(Dp(4.0)));

        let rect = SkeletonArgs::default().variant_style();
        assert_eq!(rect.height, Some(DimensionValue::Fixed(Dp(50.0))));
        assert_eq!(rect.border_radius, Some(Dp(8.0)));

        let circle = SkeletonArgs::default()
            .variant(SkeletonVariant::Circle)
            .width(Dp(40.0))
            .variant_style();
        assert_eq!(circle.border_radius, Some(Dp(20.0)));
    }

    #[test]
    fn pulse_loops_between_dim_and_bright() {
        let mut c = SkeletonController::new();
        c.sync(true, ms(0));
        c.sync(true, ms(800));
        assert!((c.opacity() - BRIGHT_OPACITY).abs() < 1e-4);
        c.sync(true, ms(1600));
        assert!((c.opacity() - DIM_OPACITY).abs() < 1e-4);
        c.sync(true, ms(2400));
        assert!((c.opacity() - BRIGHT_OPACITY).abs() < 1e-4);
    }

    #[test]
    fn stopping_resets_to_dim() {
        let mut c = SkeletonController::new();
        c.sync(true, ms(0));
        c.sync(true, ms(400));
        c.sync(false, ms(400));
        assert!(!c.is_pulsing());
        assert_eq!(c.opacity(), DIM_OPACITY);
    }
}
