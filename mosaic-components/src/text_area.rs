//! A multiline text field with a character counter.
//!
//! ## Usage
//!
//! Use for free-form text such as comments or descriptions. The footer
//! shows the error when there is one, and the character count otherwise.

use derive_setters::Setters;
use mosaic_ui::{
    CallbackWith, Dp, Style, ViewNode,
    style::{Edges, FlexDirection, Justify},
    view::TextFieldSpec,
};
use tracing::debug;

use crate::{
    text_input::{field_box_style, field_error, field_label},
    theme::use_theme,
};

/// Arguments for [`text_area`].
#[derive(Clone, PartialEq, Setters)]
pub struct TextAreaArgs {
    /// Key of the container; the field is `{key}.field` and the footer text
    /// `{key}.footer`.
    #[setters(into)]
    pub key: String,
    /// Current text.
    #[setters(into)]
    pub value: String,
    /// Hint shown while empty.
    #[setters(strip_option, into)]
    pub placeholder: Option<String>,
    /// Label above the field.
    #[setters(strip_option, into)]
    pub label: Option<String>,
    /// Error message in the footer; also turns the border red.
    #[setters(strip_option, into)]
    pub error: Option<String>,
    /// Reject input and grey out.
    pub disabled: bool,
    /// Maximum number of characters.
    #[setters(strip_option)]
    pub max_length: Option<usize>,
    /// Field height.
    pub height: Dp,
    /// Called with the edited text, truncated to `max_length`.
    #[setters(skip)]
    pub on_change_text: Option<CallbackWith<String>>,
    /// Extra container style.
    pub container_style: Style,
    /// Extra field style.
    pub input_style: Style,
    /// Extra label style.
    pub label_style: Style,
    /// Extra error style.
    pub error_style: Style,
}

impl Default for TextAreaArgs {
    fn default() -> Self {
        Self {
            key: "text_area".to_string(),
            value: String::new(),
            placeholder: None,
            label: None,
            error: None,
            disabled: false,
            max_length: None,
            height: Dp(120.0),
            on_change_text: None,
            container_style: Style::default(),
            input_style: Style::default(),
            label_style: Style::default(),
            error_style: Style::default(),
        }
    }
}

impl TextAreaArgs {
    /// Sets the edit handler.
    pub fn on_change_text<F>(mut self, f: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_change_text = Some(CallbackWith::new(f));
        self
    }

    /// Footer counter, `len/max` or just `len` without a limit. Counts
    /// characters, not bytes.
    pub fn counter_text(&self) -> String {
        let len = self.value.chars().count();
        match self.max_length {
            Some(max) => format!("{len}/{max}"),
            None => len.to_string(),
        }
    }
}

fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((byte, _)) = text.char_indices().nth(max) {
        debug!(max, "text area input truncated");
        text.truncate(byte);
    }
    text
}

/// Renders a text area.
pub fn text_area(args: &TextAreaArgs) -> ViewNode {
    let colors = use_theme().colors;

    let mut field = ViewNode::text_field(TextFieldSpec {
        value: args.value.clone(),
        placeholder: args.placeholder.clone(),
        placeholder_color: Some(colors.text_light),
        multiline: true,
        editable: !args.disabled,
        max_length: args.max_length,
    })
    .key(format!("{}.field", args.key))
    .disabled(args.disabled)
    .style(
        Style::new()
            .height(args.height)
            .padding(Edges::all(Dp(12.0)))
            .font_size(Dp(16.0))
            .color(if args.disabled { colors.disabled } else { colors.text })
            .merge(&args.input_style),
    );
    if let Some(on_change_text) = args.on_change_text.clone() {
        let max_length = args.max_length;
        field = field.on_change_text(move |text: String| {
            let text = match max_length {
                Some(max) => truncate_chars(text, max),
                None => text,
            };
            on_change_text.call(text);
        });
    }

    let footer_text = match &args.error {
        Some(error) => field_error(error, &colors, &args.error_style),
        None => ViewNode::text(args.counter_text()).style(
            Style::new()
                .font_size(Dp(12.0))
                .color(colors.text_light),
        ),
    }
    .key(format!("{}.footer", args.key));

    ViewNode::view()
        .key(args.key.clone())
        .style(
            Style::new()
                .margin(Edges::symmetric(Dp(8.0), Dp::ZERO))
                .merge(&args.container_style),
        )
        .child_opt(
            args.label
                .as_deref()
                .map(|label| field_label(label, args.disabled, &colors, &args.label_style)),
        )
        .child(
            ViewNode::view()
                .key(format!("{}.box", args.key))
                .style(field_box_style(
                    &colors,
                    args.error.is_some(),
                    false,
                    args.disabled,
                ))
                .child(field),
        )
        .child(
            ViewNode::view()
                .style(
                    Style::new()
                        .flex_direction(FlexDirection::Row)
                        .justify_content(Justify::End)
                        .margin(Edges {
                            top: Dp(4.0),
                            ..Edges::default()
                        }),
                )
                .child(footer_text),
        )
}

#[cfg(test)]
mod tests {
    use mosaic_ui::testing::CallRecorder;

    use super::*;

    #[test]
    fn counter_formats() {
        let args = TextAreaArgs::default().value("héllo");
        assert_eq!(args.counter_text(), "5");
        assert_eq!(args.max_length(200).counter_text(), "5/200");
    }

    #[test]
    fn error_replaces_counter() {
        let node = text_area(&TextAreaArgs::default().value("abc").error("Too short"));
        let footer = node.find("text_area.footer").unwrap();
        assert_eq!(footer.rendered_text().as_deref(), Some("Too short"));
    }

    #[test]
    fn edits_are_truncated_to_max_length() {
        let recorder = CallRecorder::new();
        let cb = recorder.callback();
        let node = text_area(
            &TextAreaArgs::default()
                .max_length(3)
                .on_change_text(move |text| cb.call(text)),
        );
        let field = node.find("text_area.field").unwrap();
        field.handlers.on_change_text.as_ref().unwrap().call("abcdef".to_string());
        field.handlers.on_change_text.as_ref().unwrap().call("ab".to_string());
        assert_eq!(recorder.calls(), vec!["abc".to_string(), "ab".to_string()]);
    }
}
