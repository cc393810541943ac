//! Themed widgets for the mosaic toolkit.
//!
//! Every component is a function from an args struct to a
//! [`ViewNode`](mosaic_ui::ViewNode) tree. Args are plain structs with
//! `Default` values and `derive_setters` builders. Components that animate or
//! track interaction keep a controller in remembered state keyed by the
//! component's `key`, or in a caller-supplied `State` when `controller` is
//! set.
//!
//! # Example
//!
//! ```
//! use mosaic_components::{
//!     button::{ButtonArgs, button},
//!     slider::{SliderArgs, slider},
//!     theme::{ThemeOverrides, theme_provider},
//! };
//! use mosaic_ui::{Color, Runtime, RuntimeConfig, ViewNode};
//!
//! let mut runtime = Runtime::headless(RuntimeConfig::default());
//! runtime.frame(|| {
//!     theme_provider(ThemeOverrides::default().primary(Color::BLACK), || {
//!         ViewNode::view()
//!             .child(button(&ButtonArgs::filled("Save", || {})))
//!             .child(slider(&SliderArgs::default().value(30.0)))
//!     })
//! });
//! assert!(runtime.find("slider.thumb").is_some());
//! runtime.press("button").unwrap();
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod app_bar;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod dialog;
pub mod divider;
pub mod floating_action_button;
pub mod loading;
pub mod radio_button;
pub mod skeleton;
pub mod slider;
pub mod snackbar;
pub mod switch;
pub mod text_area;
pub mod text_input;
pub mod theme;
pub mod tooltip;
