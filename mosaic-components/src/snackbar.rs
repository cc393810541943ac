//! A transient message bar that slides in from the bottom edge.
//!
//! ## Usage
//!
//! Use for brief feedback about an operation, optionally with one action.
//! The caller owns `visible`. While visible, a dismiss timer calls
//! `on_dismiss` after `duration`; the caller is expected to hide the bar in
//! response.

use std::time::Duration;

use derive_setters::Setters;
use mosaic_ui::{
    AnimatedValue, AnimationHandle, Animator, Callback, Dp, State, Style, ViewNode,
    animation::{parallel, timing},
    frame_time, remember_with_key,
    style::{
        Align, Edges, FlexDirection, FontWeight, Inset, Justify, Position, Shadow, TextTransform,
        TransformOp,
    },
};
use tracing::{debug, trace};

use crate::theme::use_theme;

const SLIDE_DURATION: Duration = Duration::from_millis(200);
const HIDDEN_OFFSET: f32 = 100.0;

/// Defaults for [`snackbar`].
pub struct SnackbarDefaults;

impl SnackbarDefaults {
    /// Time a visible snackbar waits before calling `on_dismiss`.
    pub const DURATION: Duration = Duration::from_millis(4000);
    /// Distance from the bottom edge.
    pub const BOTTOM: Dp = Dp(20.0);
    /// Distance from the side edges.
    pub const SIDE: Dp = Dp(16.0);
}

/// A single action button shown at the trailing edge.
#[derive(Debug, Clone, PartialEq)]
pub struct SnackbarAction {
    /// Button label, rendered uppercase.
    pub label: String,
    /// Press handler.
    pub on_press: Callback,
}

impl SnackbarAction {
    /// Creates an action.
    pub fn new(label: impl Into<String>, on_press: impl Into<Callback>) -> Self {
        Self {
            label: label.into(),
            on_press: on_press.into(),
        }
    }
}

/// Arguments for [`snackbar`].
#[derive(Clone, PartialEq, Setters)]
pub struct SnackbarArgs {
    /// Dispatch key of the container; the action is `{key}.action`.
    #[setters(into)]
    pub key: String,
    /// Whether the bar is shown.
    pub visible: bool,
    /// Message text.
    #[setters(into)]
    pub message: String,
    /// Optional action button.
    #[setters(strip_option)]
    pub action: Option<SnackbarAction>,
    /// Delay before `on_dismiss` fires while visible.
    pub duration: Duration,
    /// Called when the dismiss timer fires.
    #[setters(skip)]
    pub on_dismiss: Option<Callback>,
    /// Optional external controller.
    #[setters(skip)]
    pub controller: Option<State<SnackbarController>>,
}

impl Default for SnackbarArgs {
    fn default() -> Self {
        Self {
            key: "snackbar".to_string(),
            visible: false,
            message: String::new(),
            action: None,
            duration: SnackbarDefaults::DURATION,
            on_dismiss: None,
            controller: None,
        }
    }
}

impl SnackbarArgs {
    /// Sets the dismiss handler.
    pub fn on_dismiss(mut self, on_dismiss: impl Into<Callback>) -> Self {
        self.on_dismiss = Some(on_dismiss.into());
        self
    }

    /// Uses an external controller.
    pub fn controller(mut self, controller: State<SnackbarController>) -> Self {
        self.controller = Some(controller);
        self
    }
}

/// Slide animation and dismiss timer of a snackbar.
#[derive(Debug)]
pub struct SnackbarController {
    translate_y: AnimatedValue,
    opacity: AnimatedValue,
    animator: Animator,
    transition: Option<AnimationHandle>,
    synced: Option<(bool, Duration)>,
    dismiss_at: Option<Duration>,
}

impl Default for SnackbarController {
    fn default() -> Self {
        Self {
            translate_y: AnimatedValue::new(HIDDEN_OFFSET),
            opacity: AnimatedValue::new(0.0),
            animator: Animator::new(),
            transition: None,
            synced: None,
            dismiss_at: None,
        }
    }
}

impl SnackbarController {
    /// Creates a hidden controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical offset in dp; 0 when fully shown.
    pub fn translate_y(&self) -> f32 {
        self.translate_y.get()
    }

    /// Current opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }

    /// Frame time at which the dismiss timer fires, if armed.
    pub fn dismiss_deadline(&self) -> Option<Duration> {
        self.dismiss_at
    }

    /// Advances the animation to `now` and reacts to `visible`/`duration`
    /// changes. Returns `true` when the dismiss timer fired during this call.
    pub fn sync(&mut self, visible: bool, duration: Duration, now: Duration) -> bool {
        for handle in self.animator.tick(now) {
            if self.transition == Some(handle) {
                self.transition = None;
            }
        }

        if self.synced != Some((visible, duration)) {
            if self.dismiss_at.take().is_some() {
                debug!("snackbar dismiss timer cancelled");
            }
            if let Some(handle) = self.transition.take() {
                self.animator.stop(handle);
            }
            let (offset, opacity) = if visible { (0.0, 1.0) } else { (HIDDEN_OFFSET, 0.0) };
            self.transition = Some(self.animator.start(
                parallel([
                    timing(&self.translate_y, offset, SLIDE_DURATION),
                    timing(&self.opacity, opacity, SLIDE_DURATION),
                ]),
                now,
            ));
            if visible {
                self.dismiss_at = Some(now + duration);
            }
            self.synced = Some((visible, duration));
            trace!(visible, ?duration, "snackbar transition started");
        }

        match self.dismiss_at {
            Some(at) if now >= at => {
                self.dismiss_at = None;
                trace!("snackbar dismiss timer fired");
                true
            }
            _ => false,
        }
    }
}

impl Drop for SnackbarController {
    fn drop(&mut self) {
        if self.dismiss_at.is_some() {
            debug!("snackbar dropped with a pending dismiss timer");
        }
    }
}

/// Renders a snackbar, or nothing while hidden.
pub fn snackbar(args: &SnackbarArgs) -> Option<ViewNode> {
    let controller = args
        .controller
        .clone()
        .unwrap_or_else(|| remember_with_key(&args.key, SnackbarController::new));
    let (fired, translate_y, opacity) = controller.with_mut(|c| {
        let fired = c.sync(args.visible, args.duration, frame_time());
        (fired, c.translate_y(), c.opacity())
    });
    if fired && let Some(on_dismiss) = &args.on_dismiss {
        on_dismiss.call();
    }
    if !args.visible {
        return None;
    }

    let colors = use_theme().colors;
    let message = ViewNode::text(args.message.clone()).style(
        Style::new()
            .color(mosaic_ui::Color::WHITE)
            .flex(1.0)
            .margin(Edges {
                right: Dp(16.0),
                ..Edges::default()
            }),
    );
    let action = args.action.as_ref().map(|action| {
        ViewNode::pressable()
            .key(format!("{}.action", args.key))
            .on_press(action.on_press.clone())
            .child(
                ViewNode::text(action.label.clone()).style(
                    Style::new()
                        .color(colors.primary)
                        .font_weight(FontWeight::SemiBold)
                        .text_transform(TextTransform::Uppercase),
                ),
            )
    });

    Some(
        ViewNode::view()
            .key(args.key.clone())
            .style(
                Style::new()
                    .position(Position::Absolute)
                    .inset(Inset {
                        bottom: Some(SnackbarDefaults::BOTTOM),
                        left: Some(SnackbarDefaults::SIDE),
                        right: Some(SnackbarDefaults::SIDE),
                        top: None,
                    })
                    .padding(Edges::all(Dp(16.0)))
                    .border_radius(Dp(8.0))
                    .flex_direction(FlexDirection::Row)
                    .align_items(Align::Center)
                    .justify_content(Justify::SpaceBetween)
                    .elevation(Dp(6.0))
                    .shadow(Shadow::drop(0.25, Dp(4.0)))
                    .background(colors.dark)
                    .opacity(opacity)
                    .transform(TransformOp::TranslateY(translate_y)),
            )
            .child(message)
            .child_opt(action),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn showing_slides_in_and_arms_timer() {
        let mut c = SnackbarController::new();
        assert!(!c.sync(true, ms(4000), ms(0)));
        assert_eq!(c.dismiss_deadline(), Some(ms(4000)));
        c.sync(true, ms(4000), ms(200));
        assert_eq!(c.translate_y(), 0.0);
        assert_eq!(c.opacity(), 1.0);
        assert!(!c.sync(true, ms(4000), ms(3999)));
        assert!(c.sync(true, ms(4000), ms(4000)));
        assert!(!c.sync(true, ms(4000), ms(5000)), "fires once");
    }

    #[test]
    fn hiding_cancels_timer_and_slides_out() {
        let mut c = SnackbarController::new();
        c.sync(true, ms(1000), ms(0));
        c.sync(false, ms(1000), ms(300));
        assert_eq!(c.dismiss_deadline(), None);
        assert!(!c.sync(false, ms(1000), ms(2000)));
        assert_eq!(c.translate_y(), HIDDEN_OFFSET);
        assert_eq!(c.opacity(), 0.0);
    }

    #[test]
    fn duration_change_rearms_timer() {
        let mut c = SnackbarController::new();
        c.sync(true, ms(1000), ms(0));
        c.sync(true, ms(3000), ms(500));
        assert_eq!(c.dismiss_deadline(), Some(ms(3500)));
        assert!(!c.sync(true, ms(3000), ms(1000)));
    }

    #[test]
    fn hidden_snackbar_renders_nothing() {
        assert!(snackbar(&SnackbarArgs::default().key("snackbar-hidden-test")).is_none());
        let shown = snackbar(
            &SnackbarArgs::default()
                .key("snackbar-shown-test")
                .visible(true)
                .message("Saved")
                .action(SnackbarAction::new("undo", || {})),
        )
        .unwrap();
        assert_eq!(shown.text_content(), "Saved UNDO");
    }
}
