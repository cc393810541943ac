//! mosaic-ui is the host seam of the mosaic widget toolkit.
//!
//! Components in `mosaic-components` never talk to a platform directly. They
//! compose the primitives defined here:
//!
//! - units ([`Dp`], [`Px`]) and [`Color`]
//! - declarative [`Style`]s and [`ViewNode`] trees
//! - event handlers ([`Callback`], [`CallbackWith`]) and shared [`State`]
//! - ambient values through [`provide_context`] / [`use_context`]
//! - pan [`GestureEvent`]s and [`LayoutEvent`]s
//! - a [`FrameClock`] and the [`animation`] model
//!
//! A platform host maps the produced view tree onto native views. The
//! headless [`Runtime`] plays the host's role in tests and demos: it builds
//! frames, advances time and dispatches events to nodes by key.
//!
//! ```
//! use mosaic_ui::{Runtime, RuntimeConfig, State, ViewNode};
//!
//! let taps = State::new(0u32);
//! let mut runtime = Runtime::headless(RuntimeConfig::default());
//! let sink = taps.clone();
//! runtime.frame(move || {
//!     ViewNode::pressable()
//!         .key("counter")
//!         .on_press(move || sink.with_mut(|n| *n += 1))
//! });
//! runtime.press("counter").unwrap();
//! assert_eq!(taps.get(), 1);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod clock;
pub mod color;
pub mod context;
pub mod dp;
mod entry_point;
pub mod gesture;
pub mod prop;
pub mod px;
pub mod runtime;
pub mod state;
pub mod style;
#[cfg(feature = "testing")]
pub mod testing;
pub mod view;

pub use crate::{
    animation::{AnimatedValue, Animation, AnimationHandle, Animator, Easing},
    clock::{FrameClock, ManualClock, SystemClock, frame_time},
    color::{Color, ColorParseError},
    context::{provide_context, try_use_context, use_context},
    dp::Dp,
    entry_point::{init_tracing, init_tracing_with_default},
    gesture::{GestureEvent, LayoutEvent},
    prop::{Callback, CallbackWith},
    px::{Px, PxPosition, PxSize},
    runtime::{
        DispatchError, Runtime, RuntimeConfig, ScreenMetrics, remember_with_key,
    },
    state::State,
    style::{DimensionValue, Style},
    view::{ViewKind, ViewNode},
};

pub use tracing;
