//! A top app bar with a centered title and two action slots.
//!
//! ## Usage
//!
//! Place at the top of a screen for navigation and screen-level actions.

use derive_setters::Setters;
use mosaic_ui::{
    Callback, Color, Dp, Style, ViewNode,
    style::{Align, Edges, FlexDirection, FontWeight, Justify},
};

use crate::theme::use_theme;

/// Defaults for [`app_bar`].
pub struct AppBarDefaults;

impl AppBarDefaults {
    /// Bar height.
    pub const HEIGHT: Dp = Dp(56.0);
    /// Width of each side slot.
    pub const SLOT_WIDTH: Dp = Dp(40.0);
}

/// Arguments for [`app_bar`].
#[derive(Clone, PartialEq, Setters)]
pub struct AppBarArgs {
    /// Key of the bar; slots are `{key}.left` and `{key}.right`.
    #[setters(into)]
    pub key: String,
    /// Optional title.
    #[setters(strip_option, into)]
    pub title: Option<String>,
    /// Content of the left slot.
    #[setters(strip_option)]
    pub left_icon: Option<ViewNode>,
    /// Content of the right slot.
    #[setters(strip_option)]
    pub right_icon: Option<ViewNode>,
    /// Left slot press handler.
    #[setters(skip)]
    pub on_left_press: Option<Callback>,
    /// Right slot press handler.
    #[setters(skip)]
    pub on_right_press: Option<Callback>,
    /// Extra style, applied last.
    pub style: Style,
}

impl Default for AppBarArgs {
    fn default() -> Self {
        Self {
            key: "app_bar".to_string(),
            title: None,
            left_icon: None,
            right_icon: None,
            on_left_press: None,
            on_right_press: None,
            style: Style::default(),
        }
    }
}

impl AppBarArgs {
    /// Sets the left slot handler.
    pub fn on_left_press(mut self, f: impl Into<Callback>) -> Self {
        self.on_left_press = Some(f.into());
        self
    }

    /// Sets the right slot handler.
    pub fn on_right_press(mut self, f: impl Into<Callback>) -> Self {
        self.on_right_press = Some(f.into());
        self
    }
}

fn slot(key: String, icon: Option<&ViewNode>, on_press: Option<&Callback>) -> ViewNode {
    let mut node = ViewNode::pressable()
        .key(key)
        .style(
            Style::new()
                .width(AppBarDefaults::SLOT_WIDTH)
                .align_items(Align::Center)
                .justify_content(Justify::Center),
        )
        .child_opt(icon.cloned());
    if let Some(on_press) = on_press {
        node = node.on_press(on_press.clone());
    }
    node
}

/// Renders an app bar.
pub fn app_bar(args: &AppBarArgs) -> ViewNode {
    let colors = use_theme().colors;
    let title = args.title.as_ref().map(|title| {
        ViewNode::text(title.clone()).style(
            Style::new()
                .font_size(Dp(18.0))
                .font_weight(FontWeight::SemiBold)
                .color(Color::WHITE),
        )
    });

    ViewNode::view()
        .key(args.key.clone())
        .style(
            Style::new()
                .height(AppBarDefaults::HEIGHT)
                .flex_direction(FlexDirection::Row)
                .align_items(Align::Center)
                .padding(Edges::symmetric(Dp::ZERO, Dp(12.0)))
                .elevation(Dp(4.0))
                .background(colors.primary)
                .merge(&args.style),
        )
        .child(slot(
            format!("{}.left", args.key),
            args.left_icon.as_ref(),
            args.on_left_press.as_ref(),
        ))
        .child(
            ViewNode::view()
                .style(
                    Style::new()
                        .flex(1.0)
                        .align_items(Align::Center)
                        .justify_content(Justify::Center)
                        .padding(Edges::symmetric(Dp::ZERO, Dp(8.0))),
                )
                .child_opt(title),
        )
        .child(slot(
            format!("{}.right", args.key),
            args.right_icon.as_ref(),
            args.on_right_press.as_ref(),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_uses_primary_and_white_title() {
        let node = app_bar(&AppBarArgs::default().title("Inbox"));
        assert_eq!(node.style.background, Some(use_theme().colors.primary));
        assert_eq!(node.style.height, Some(AppBarDefaults::HEIGHT.into()));
        assert_eq!(node.text_content(), "Inbox");
        assert!(node.find("app_bar.left").unwrap().handlers.on_press.is_none());
    }
}
