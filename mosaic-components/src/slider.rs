//! A continuous-value slider driven by a horizontal pan on its thumb.
//!
//! ## Usage
//!
//! Use to let users pick a value from a numeric range, optionally snapped to
//! steps. The slider is controlled: it reports values through
//! `on_value_change` and expects the caller to feed the chosen value back in
//! through `value`.
//!
//! While a drag is in progress the thumb follows the finger, and value
//! updates arriving from the caller are ignored until the finger lifts. On
//! release the thumb settles on the exact position of the final value.
//!
//! ```
//! use mosaic_components::slider::{SliderArgs, SliderConfig, slider};
//! use mosaic_ui::{Runtime, RuntimeConfig, State, gesture::LayoutEvent};
//!
//! let volume = State::new(40.0_f32);
//! let mut runtime = Runtime::headless(RuntimeConfig::default());
//! let build = {
//!     let volume = volume.clone();
//!     move || {
//!         let sink = volume.clone();
//!         slider(
//!             &SliderArgs::default()
//!                 .key("volume")
//!                 .value(volume.get())
//!                 .config(SliderConfig::new(0.0, 100.0, 10.0).unwrap())
//!                 .on_value_change(move |v| sink.set(v)),
//!         )
//!     }
//! };
//! runtime.frame(build.clone());
//! runtime.layout("volume", LayoutEvent::sized(200.0, 40.0)).unwrap();
//! runtime.frame(build.clone());
//! runtime.drag("volume.thumb", [40.0]).unwrap();
//! assert_eq!(volume.get(), 60.0);
//! ```

use derive_setters::Setters;
use mosaic_ui::{CallbackWith, Color, Dp, State, Style, ViewNode, remember_with_key};
use tracing::{debug, trace};

use crate::theme::use_theme;

pub use layout::{SliderConfig, SliderConfigError};

mod interaction;
mod layout;
mod render;

const CONTAINER_HEIGHT: Dp = Dp(40.0);
const TRACK_HEIGHT: Dp = Dp(4.0);

/// Arguments for [`slider`].
#[derive(Clone, PartialEq, Setters)]
pub struct SliderArgs {
    /// Dispatch key of the container. Child nodes derive their keys from it
    /// (`{key}.track`, `{key}.fill`, `{key}.thumb`), and the internal
    /// controller is remembered under it.
    #[setters(into)]
    pub key: String,
    /// The value supplied by the caller.
    pub value: f32,
    /// Range and step.
    pub config: SliderConfig,
    /// Called with every snapped value during a drag and once on release.
    #[setters(skip)]
    pub on_value_change: Option<CallbackWith<f32>>,
    /// Ignore gestures and render in the theme's disabled color.
    pub disabled: bool,
    /// Extra style for the container.
    pub style: Style,
    /// Fill color. Defaults to the theme primary.
    #[setters(strip_option)]
    pub track_color: Option<Color>,
    /// Thumb color. Defaults to the theme primary.
    #[setters(strip_option)]
    pub thumb_color: Option<Color>,
    /// Thumb diameter.
    pub thumb_size: Dp,
    /// Optional external controller. When `None`, the slider keeps its own
    /// controller remembered under `key`.
    #[setters(skip)]
    pub controller: Option<State<SliderController>>,
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            key: "slider".to_string(),
            value: 0.0,
            config: SliderConfig::default(),
            on_value_change: None,
            disabled: false,
            style: Style::default(),
            track_color: None,
            thumb_color: None,
            thumb_size: Dp(24.0),
            controller: None,
        }
    }
}

impl SliderArgs {
    /// Sets the value-change handler.
    pub fn on_value_change<F>(mut self, on_value_change: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_value_change = Some(CallbackWith::new(on_value_change));
        self
    }

    /// Sets the value-change handler using a shared callback.
    pub fn on_value_change_shared(mut self, on_value_change: impl Into<CallbackWith<f32>>) -> Self {
        self.on_value_change = Some(on_value_change.into());
        self
    }

    /// Uses an external controller.
    pub fn controller(mut self, controller: State<SliderController>) -> Self {
        self.controller = Some(controller);
        self
    }
}

/// Gesture and value state of a slider.
///
/// Keeps the committed value, the thumb offset along the measured track and
/// whether a drag is in progress. Methods that produce a value to report
/// return it instead of calling out, so handlers can invoke callbacks after
/// releasing the state lock.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderController {
    config: SliderConfig,
    committed_value: f32,
    track_length: f32,
    track_position: f32,
    dragging: bool,
    drag_origin: f32,
    last_external: Option<f32>,
}

impl Default for SliderController {
    fn default() -> Self {
        Self::new(SliderConfig::default(), 0.0)
    }
}

impl SliderController {
    /// Creates a controller holding `value`, clamped and snapped.
    pub fn new(config: SliderConfig, value: f32) -> Self {
        Self {
            config,
            committed_value: config.snap(value),
            track_length: 0.0,
            track_position: 0.0,
            dragging: false,
            drag_origin: 0.0,
            last_external: Some(value),
        }
    }

    /// Current range.
    pub fn config(&self) -> SliderConfig {
        self.config
    }

    /// Last value reported to or received from the caller.
    pub fn committed_value(&self) -> f32 {
        self.committed_value
    }

    /// Measured track length in px.
    pub fn track_length(&self) -> f32 {
        self.track_length
    }

    /// Thumb offset from the track start in px.
    pub fn track_position(&self) -> f32 {
        self.track_position
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn settle(&mut self) {
        self.track_position = self
            .config
            .position_from_value(self.committed_value, self.track_length);
    }

    /// Replaces the range. The committed value is re-snapped into it and, when
    /// not dragging, the thumb moves to match.
    pub fn set_config(&mut self, config: SliderConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        self.committed_value = config.snap(self.committed_value);
        if !self.dragging {
            self.settle();
        }
    }

    /// Records a new track measurement.
    pub fn on_layout(&mut self, track_length: f32) {
        self.track_length = track_length.max(0.0);
        if !self.dragging {
            self.settle();
        } else {
            self.track_position = self.track_position.clamp(0.0, self.track_length);
        }
        trace!(track_length = self.track_length, "slider measured");
    }

    /// Begins a drag at the current thumb offset.
    pub fn on_gesture_start(&mut self) {
        self.dragging = true;
        self.drag_origin = self.track_position;
        trace!(origin = self.drag_origin, "slider drag started");
    }

    /// Moves the thumb to the drag origin plus `delta` px and returns the
    /// snapped value there. Returns `None` when no drag is in progress.
    pub fn on_gesture_move(&mut self, delta: f32) -> Option<f32> {
        if !self.dragging {
            trace!(delta, "slider move without drag ignored");
            return None;
        }
        self.track_position = (self.drag_origin + delta).clamp(0.0, self.track_length);
        let value = self
            .config
            .value_from_position(self.track_position, self.track_length);
        self.committed_value = value;
        trace!(position = self.track_position, value, "slider drag moved");
        Some(value)
    }

    /// Ends the drag, settles the thumb exactly on the final value and
    /// returns it. Returns `None` when no drag is in progress.
    pub fn on_gesture_end(&mut self) -> Option<f32> {
        if !self.dragging {
            trace!("slider release without drag ignored");
            return None;
        }
        let value = self
            .config
            .value_from_position(self.track_position, self.track_length);
        self.committed_value = value;
        self.settle();
        self.dragging = false;
        trace!(position = self.track_position, value, "slider drag ended");
        Some(value)
    }

    /// Applies a value supplied by the caller. Dropped while dragging;
    /// returns whether it was applied.
    pub fn on_external_value_change(&mut self, value: f32) -> bool {
        if self.dragging {
            debug!(value, "slider ignored external value during drag");
            return false;
        }
        self.committed_value = self.config.snap(value);
        self.settle();
        true
    }

    /// Applies `value` if it differs from the last caller value seen. A
    /// value dropped during a drag is retried on the next call.
    pub(crate) fn sync_external(&mut self, value: f32) {
        if self.last_external == Some(value) {
            return;
        }
        if self.on_external_value_change(value) {
            self.last_external = Some(value);
        }
    }
}

/// Renders a slider.
///
/// The container reports its width as the track length. The thumb carries
/// the pan handler: a drag moves it relative to where it started, and every
/// move reports the snapped value under the finger.
pub fn slider(args: &SliderArgs) -> ViewNode {
    let controller = args.controller.clone().unwrap_or_else(|| {
        remember_with_key(&args.key, || SliderController::new(args.config, args.value))
    });
    let snapshot = controller.with_mut(|c| {
        c.set_config(args.config);
        c.sync_external(args.value);
        c.clone()
    });

    let theme = use_theme();
    let colors = render::SliderColors::resolve(args, &theme.colors);
    let on_layout = interaction::layout_handler(controller.clone());
    let on_gesture = interaction::gesture_handler(
        controller,
        args.on_value_change.clone(),
        args.disabled,
    );
    render::render_slider(args, &snapshot, &colors, on_layout, on_gesture)
}
