//! A bordered surface grouping related content.
//!
//! ## Usage
//!
//! Group a title, subtitle and arbitrary content. The card becomes pressable
//! only when `on_press` is set.

use derive_setters::Setters;
use mosaic_ui::{
    Callback, Color, Dp, Style, ViewNode,
    style::{Edges, FontWeight, Shadow},
};

use crate::theme::use_theme;

/// Arguments for [`card`].
#[derive(Clone, PartialEq, Setters)]
pub struct CardArgs {
    /// Dispatch key.
    #[setters(into)]
    pub key: String,
    /// Optional title.
    #[setters(strip_option, into)]
    pub title: Option<String>,
    /// Optional subtitle below the title.
    #[setters(strip_option, into)]
    pub subtitle: Option<String>,
    /// Press handler; makes the card pressable.
    #[setters(skip)]
    pub on_press: Option<Callback>,
    /// Extra style, applied last.
    pub style: Style,
}

impl Default for CardArgs {
    fn default() -> Self {
        Self {
            key: "card".to_string(),
            title: None,
            subtitle: None,
            on_press: None,
            style: Style::default(),
        }
    }
}

impl CardArgs {
    /// Sets the press handler.
    pub fn on_press(mut self, on_press: impl Into<Callback>) -> Self {
        self.on_press = Some(on_press.into());
        self
    }
}

/// Renders a card around `content`.
pub fn card(args: &CardArgs, content: impl IntoIterator<Item = ViewNode>) -> ViewNode {
    let colors = use_theme().colors;
    let title = args.title.as_ref().map(|title| {
        ViewNode::text(title.clone()).style(
            Style::new()
                .font_size(Dp(16.0))
                .font_weight(FontWeight::SemiBold)
                .color(colors.dark),
        )
    });
    let subtitle = args.subtitle.as_ref().map(|subtitle| {
        ViewNode::text(subtitle.clone()).style(
            Style::new()
                .font_size(Dp(13.0))
                .margin(Edges {
                    top: Dp(4.0),
                    ..Edges::default()
                })
                .color(colors.text_light),
        )
    });

    let container = match &args.on_press {
        Some(on_press) => ViewNode::pressable().on_press(on_press.clone()),
        None => ViewNode::view(),
    };
    container
        .key(args.key.clone())
        .style(
            Style::new()
                .border_radius(Dp(8.0))
                .padding(Edges::all(Dp(12.0)))
                .border_width(Dp(1.0))
                .margin(Edges::symmetric(Dp(8.0), Dp::ZERO))
                .elevation(Dp(2.0))
                .shadow(Shadow::drop(0.08, Dp(4.0)))
                .border_color(colors.border)
                .background(Color::WHITE)
                .merge(&args.style),
        )
        .child_opt(title)
        .child_opt(subtitle)
        .child(
            ViewNode::view()
                .style(Style::new().margin(Edges {
                    top: Dp(8.0),
                    ..Edges::default()
                }))
                .children(content),
        )
}

#[cfg(test)]
mod tests {
    use mosaic_ui::ViewKind;

    use super::*;

    #[test]
    fn pressable_only_with_handler() {
        let plain = card(&CardArgs::default().title("Plain"), []);
        assert_eq!(plain.kind, ViewKind::View);
        let tappable = card(&CardArgs::default().on_press(|| {}), []);
        assert_eq!(tappable.kind, ViewKind::Pressable);
        assert!(tappable.handlers.on_press.is_some());
    }

    #[test]
    fn title_then_subtitle_then_content() {
        let node = card(
            &CardArgs::default().title("Title").subtitle("Sub"),
            [ViewNode::text("Body")],
        );
        assert_eq!(node.text_content(), "Title Sub Body");
    }
}
