//! A modal confirmation dialog.
//!
//! ## Usage
//!
//! Ask the user to confirm or cancel an action. The dialog fades in over a
//! dimmed backdrop; the back button counts as cancel.

use derive_setters::Setters;
use mosaic_ui::{
    Callback, Color, DimensionValue, Dp, Style, ViewNode,
    style::{Align, Edges, FlexDirection, FontWeight, Justify},
    view::{ModalAnimation, ModalSpec},
};

use crate::theme::use_theme;

/// Defaults for [`dialog`].
pub struct DialogDefaults;

impl DialogDefaults {
    /// Backdrop color, black at 40%.
    pub const BACKDROP: Color = Color::new(0.0, 0.0, 0.0, 0.4);
    /// Panel width as a share of the screen.
    pub const WIDTH: DimensionValue = DimensionValue::Percent(84.0);
    /// Confirm button label.
    pub const CONFIRM_LABEL: &str = "OK";
    /// Cancel button label.
    pub const CANCEL_LABEL: &str = "Cancel";
}

/// Arguments for [`dialog`].
#[derive(Clone, PartialEq, Setters)]
pub struct DialogArgs {
    /// Key of the modal; actions are `{key}.cancel` and `{key}.confirm`.
    #[setters(into)]
    pub key: String,
    /// Whether the dialog is presented.
    pub visible: bool,
    /// Optional title.
    #[setters(strip_option, into)]
    pub title: Option<String>,
    /// Confirm button label.
    #[setters(into)]
    pub confirm_label: String,
    /// Cancel button label.
    #[setters(into)]
    pub cancel_label: String,
    /// Confirm handler.
    #[setters(skip)]
    pub on_confirm: Option<Callback>,
    /// Cancel handler, also used for close requests.
    #[setters(skip)]
    pub on_cancel: Option<Callback>,
}

impl Default for DialogArgs {
    fn default() -> Self {
        Self {
            key: "dialog".to_string(),
            visible: false,
            title: None,
            confirm_label: DialogDefaults::CONFIRM_LABEL.to_string(),
            cancel_label: DialogDefaults::CANCEL_LABEL.to_string(),
            on_confirm: None,
            on_cancel: None,
        }
    }
}

impl DialogArgs {
    /// Sets the confirm handler.
    pub fn on_confirm(mut self, on_confirm: impl Into<Callback>) -> Self {
        self.on_confirm = Some(on_confirm.into());
        self
    }

    /// Sets the cancel handler.
    pub fn on_cancel(mut self, on_cancel: impl Into<Callback>) -> Self {
        self.on_cancel = Some(on_cancel.into());
        self
    }
}

fn action(
    key: String,
    label: &str,
    color: Color,
    weight: Option<FontWeight>,
    on_press: Option<&Callback>,
) -> ViewNode {
    let mut text_style = Style::new().color(color);
    if let Some(weight) = weight {
        text_style = text_style.font_weight(weight);
    }
    let mut node = ViewNode::pressable()
        .key(key)
        .style(Style::new().padding(Edges::symmetric(Dp(8.0), Dp(12.0))))
        .child(ViewNode::text(label).style(text_style));
    if let Some(on_press) = on_press {
        node = node.on_press(on_press.clone());
    }
    node
}

/// Renders a dialog around `content`.
pub fn dialog(args: &DialogArgs, content: impl IntoIterator<Item = ViewNode>) -> ViewNode {
    let colors = use_theme().colors;
    let title = args.title.as_ref().map(|title| {
        ViewNode::text(title.clone()).style(
            Style::new()
                .font_size(Dp(18.0))
                .margin(Edges {
                    bottom: Dp(8.0),
                    ..Edges::default()
                })
                .color(colors.dark),
        )
    });
    let actions = ViewNode::view()
        .style(
            Style::new()
                .flex_direction(FlexDirection::Row)
                .justify_content(Justify::End),
        )
        .child(action(
            format!("{}.cancel", args.key),
            &args.cancel_label,
            colors.primary,
            None,
            args.on_cancel.as_ref(),
        ))
        .child(action(
            format!("{}.confirm", args.key),
            &args.confirm_label,
            colors.primary,
            Some(FontWeight::SemiBold),
            args.on_confirm.as_ref(),
        ));
    let panel = ViewNode::view()
        .key(format!("{}.panel", args.key))
        .style(
            Style::new()
                .width(DialogDefaults::WIDTH)
                .border_radius(Dp(8.0))
                .padding(Edges::all(Dp(16.0)))
                .border_width(Dp(1.0))
                .border_color(colors.border)
                .background(Color::WHITE)
                .elevation(Dp(6.0)),
        )
        .child_opt(title)
        .child(
            ViewNode::view()
                .style(Style::new().margin(Edges {
                    bottom: Dp(12.0),
                    ..Edges::default()
                }))
                .children(content),
        )
        .child(actions);
    let backdrop = ViewNode::view()
        .style(
            Style::new()
                .flex(1.0)
                .background(DialogDefaults::BACKDROP)
                .align_items(Align::Center)
                .justify_content(Justify::Center),
        )
        .child(panel);

    let mut modal = ViewNode::modal(ModalSpec {
        visible: args.visible,
        transparent: true,
        animation: ModalAnimation::Fade,
    })
    .key(args.key.clone())
    .child(backdrop);
    if let Some(on_cancel) = &args.on_cancel {
        modal = modal.on_request_close(on_cancel.clone());
    }
    modal
}

#[cfg(test)]
mod tests {
    use mosaic_ui::testing::CallRecorder;

    use super::*;

    #[test]
    fn default_labels_and_backdrop() {
        let node = dialog(
            &DialogArgs::default().visible(true).title("Delete?"),
            [ViewNode::text("This cannot be undone.")],
        );
        assert_eq!(node.text_content(), "Delete? This cannot be undone. Cancel OK");
        assert_eq!(DialogDefaults::BACKDROP.to_hex(), "#00000066");
    }

    #[test]
    fn close_request_cancels() {
        let cancels = CallRecorder::<()>::new();
        let node = dialog(&DialogArgs::default().on_cancel(cancels.unit_callback()), []);
        node.handlers.on_request_close.as_ref().unwrap().call();
        node.find("dialog.cancel").unwrap().handlers.on_press.as_ref().unwrap().call();
        assert_eq!(cancels.count(), 2);
    }
}
