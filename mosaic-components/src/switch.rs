//! An animated on/off switch.
//!
//! ## Usage
//!
//! Use to control a boolean setting. The switch is controlled: a press
//! reports the toggled value and the caller feeds it back through `value`,
//! at which point the thumb slides to the new side.

use std::time::Duration;

use derive_setters::Setters;
use mosaic_ui::{
    AnimatedValue, AnimationHandle, Animator, CallbackWith, Color, Dp, Easing, State, Style,
    ViewNode, animation::timing, frame_time, remember_with_key, style::Justify,
    style::TransformOp,
};
use tracing::trace;

use crate::theme::use_theme;

const ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Defaults for [`switch`].
pub struct SwitchDefaults;

impl SwitchDefaults {
    /// Gap between the thumb and the track edge.
    pub const THUMB_INSET: Dp = Dp(2.0);
    /// Track opacity when disabled.
    pub const DISABLED_OPACITY: f32 = 0.5;
    /// Default thumb color.
    pub const THUMB_COLOR: Color = Color::WHITE;
}

/// Track and thumb dimensions of a switch size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchMetrics {
    /// Track width.
    pub width: Dp,
    /// Track height.
    pub height: Dp,
    /// Thumb diameter.
    pub thumb: Dp,
}

/// Size variants.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SwitchSize {
    /// 40×24 track, 20 thumb.
    Small,
    /// 50×30 track, 26 thumb.
    #[default]
    Medium,
    /// 60×36 track, 32 thumb.
    Large,
}

impl SwitchSize {
    /// Dimensions of this size.
    pub fn metrics(self) -> SwitchMetrics {
        let (width, height, thumb) = match self {
            SwitchSize::Small => (40.0, 24.0, 20.0),
            SwitchSize::Medium => (50.0, 30.0, 26.0),
            SwitchSize::Large => (60.0, 36.0, 32.0),
        };
        SwitchMetrics {
            width: Dp(width),
            height: Dp(height),
            thumb: Dp(thumb),
        }
    }

    /// Thumb offset from the track's left edge for `value`.
    pub fn thumb_offset(self, value: bool) -> f32 {
        let m = self.metrics();
        let inset = SwitchDefaults::THUMB_INSET;
        let offset = if value {
            m.width - m.thumb - inset
        } else {
            inset
        };
        offset.0 as f32
    }
}

/// Arguments for [`switch`].
#[derive(Clone, PartialEq, Setters)]
pub struct SwitchArgs {
    /// Dispatch key of the pressable root; the thumb is `{key}.thumb`.
    #[setters(into)]
    pub key: String,
    /// Current value supplied by the caller.
    pub value: bool,
    /// Called with the toggled value when `on_change` is not set.
    #[setters(skip)]
    pub on_value_change: Option<CallbackWith<bool>>,
    /// Called with the toggled value. Takes precedence over
    /// `on_value_change`.
    #[setters(skip)]
    pub on_change: Option<CallbackWith<bool>>,
    /// Ignore presses and dim the track.
    pub disabled: bool,
    /// Thumb color.
    pub thumb_color: Color,
    /// Size variant.
    pub size: SwitchSize,
    /// Extra style for the root.
    pub style: Style,
    /// Optional external controller.
    #[setters(skip)]
    pub controller: Option<State<SwitchController>>,
}

impl Default for SwitchArgs {
    fn default() -> Self {
        Self {
            key: "switch".to_string(),
            value: false,
            on_value_change: None,
            on_change: None,
            disabled: false,
            thumb_color: SwitchDefaults::THUMB_COLOR,
            size: SwitchSize::default(),
            style: Style::default(),
            controller: None,
        }
    }
}

impl SwitchArgs {
    /// Sets the value-change handler.
    pub fn on_value_change<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_value_change = Some(CallbackWith::new(f));
        self
    }

    /// Sets the change handler.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_change = Some(CallbackWith::new(f));
        self
    }

    /// Uses an external controller.
    pub fn controller(mut self, controller: State<SwitchController>) -> Self {
        self.controller = Some(controller);
        self
    }
}

/// Thumb animation state of a switch.
#[derive(Debug, Default)]
pub struct SwitchController {
    thumb_x: AnimatedValue,
    animator: Animator,
    settled: Option<(bool, SwitchSize)>,
    pending: Option<(AnimationHandle, bool)>,
}

impl SwitchController {
    /// Creates a controller that snaps on its first sync.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current thumb offset in dp.
    pub fn thumb_offset(&self) -> f32 {
        self.thumb_x.get()
    }

    /// The value the thumb last finished moving to.
    pub fn settled_value(&self) -> Option<bool> {
        self.settled.map(|(value, _)| value)
    }

    /// Whether the thumb is moving.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// Brings the thumb in line with `value` and `size` at frame time `now`.
    ///
    /// The first sync and any size change snap the thumb. A value change
    /// slides it over 200ms; a value that flips back mid-slide turns the
    /// thumb around from where it is.
    pub fn sync(&mut self, value: bool, size: SwitchSize, now: Duration) {
        for handle in self.animator.tick(now) {
            if let Some((pending, target)) = self.pending
                && pending == handle
            {
                self.settled = Some((target, size));
                self.pending = None;
            }
        }

        let Some((settled_value, settled_size)) = self.settled else {
            self.thumb_x.set(size.thumb_offset(value));
            self.settled = Some((value, size));
            return;
        };

        if settled_size != size {
            self.cancel_pending();
            self.thumb_x.set(size.thumb_offset(value));
            self.settled = Some((value, size));
            trace!(?size, value, "switch resized, thumb snapped");
            return;
        }

        let heading_to = self.pending.map_or(settled_value, |(_, target)| target);
        if heading_to == value {
            return;
        }
        self.cancel_pending();
        let handle = self.animator.start(
            timing(&self.thumb_x, size.thumb_offset(value), ANIMATION_DURATION)
                .easing(Easing::EaseInOut),
            now,
        );
        self.pending = Some((handle, value));
        trace!(value, "switch thumb animating");
    }

    fn cancel_pending(&mut self) {
        if let Some((handle, _)) = self.pending.take() {
            self.animator.stop(handle);
        }
    }
}

/// Renders a switch.
pub fn switch(args: &SwitchArgs) -> ViewNode {
    let controller = args
        .controller
        .clone()
        .unwrap_or_else(|| remember_with_key(&args.key, SwitchController::new));
    let offset = controller.with_mut(|c| {
        c.sync(args.value, args.size, frame_time());
        c.thumb_offset()
    });

    let colors = use_theme().colors;
    let metrics = args.size.metrics();
    let track_color = if args.disabled {
        colors.disabled
    } else if args.value {
        colors.primary
    } else {
        colors.border
    };
    let opacity = if args.disabled {
        SwitchDefaults::DISABLED_OPACITY
    } else {
        1.0
    };

    let thumb = ViewNode::view().key(format!("{}.thumb", args.key)).style(
        Style::new()
            .size(metrics.thumb, metrics.thumb)
            .border_radius(Dp(999.0))
            .background(args.thumb_color)
            .transform(TransformOp::TranslateX(offset)),
    );
    let track = ViewNode::view()
        .key(format!("{}.track", args.key))
        .style(
            Style::new()
                .size(metrics.width, metrics.height)
                .border_radius(Dp(999.0))
                .justify_content(Justify::Center)
                .background(track_color)
                .opacity(opacity),
        )
        .child(thumb);

    let value = args.value;
    let disabled = args.disabled;
    let on_change = args.on_change.clone();
    let on_value_change = args.on_value_change.clone();
    ViewNode::pressable()
        .key(args.key.clone())
        .style(args.style.clone())
        .disabled(args.disabled)
        .on_press(move || {
            if disabled {
                return;
            }
            let next = !value;
            if let Some(on_change) = &on_change {
                on_change.call(next);
            } else if let Some(on_value_change) = &on_value_change {
                on_value_change.call(next);
            }
        })
        .child(track)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn thumb_offsets_follow_size_table() {
        assert_eq!(SwitchSize::Medium.thumb_offset(true), 22.0);
        assert_eq!(SwitchSize::Medium.thumb_offset(false), 2.0);
        assert_eq!(SwitchSize::Small.thumb_offset(true), 18.0);
        assert_eq!(SwitchSize::Large.thumb_offset(true), 26.0);
    }

    #[test]
    fn first_sync_snaps() {
        let mut c = SwitchController::new();
        c.sync(true, SwitchSize::Medium, ms(0));
        assert_eq!(c.thumb_offset(), 22.0);
        assert!(!c.is_animating());
        assert_eq!(c.settled_value(), Some(true));
    }

    #[test]
    fn value_change_animates_then_settles() {
        let mut c = SwitchController::new();
        c.sync(false, SwitchSize::Medium, ms(0));
        c.sync(true, SwitchSize::Medium, ms(16));
        assert!(c.is_animating());
        c.sync(true, SwitchSize::Medium, ms(116));
        let mid = c.thumb_offset();
        assert!((mid - 12.0).abs() < 0.01, "{mid}");
        assert_eq!(c.settled_value(), Some(false));
        c.sync(true, SwitchSize::Medium, ms(216));
        assert_eq!(c.thumb_offset(), 22.0);
        assert_eq!(c.settled_value(), Some(true));
        assert!(!c.is_animating());
    }

    #[test]
    fn size_change_snaps_to_new_geometry() {
        let mut c = SwitchController::new();
        c.sync(true, SwitchSize::Medium, ms(0));
        c.sync(true, SwitchSize::Large, ms(16));
        assert_eq!(c.thumb_offset(), 26.0);
        assert!(!c.is_animating());
    }

    #[test]
    fn flipping_back_mid_slide_reverses() {
        let mut c = SwitchController::new();
        c.sync(false, SwitchSize::Medium, ms(0));
        c.sync(true, SwitchSize::Medium, ms(0));
        c.sync(true, SwitchSize::Medium, ms(100));
        c.sync(false, SwitchSize::Medium, ms(100));
        assert!(c.is_animating());
        c.sync(false, SwitchSize::Medium, ms(300));
        assert_eq!(c.thumb_offset(), 2.0);
        assert_eq!(c.settled_value(), Some(false));
    }
}
