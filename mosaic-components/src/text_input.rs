//! A single-line text field with label, icons and error message.
//!
//! ## Usage
//!
//! Use in forms. The value is controlled: edits arrive through
//! `on_change_text` and the caller passes the new text back as `value`.
//! Focus is tracked internally to highlight the border.

use derive_setters::Setters;
use mosaic_ui::{
    CallbackWith, Color, Dp, State, Style, ViewNode,
    remember_with_key,
    style::{Align, Edges, FlexDirection},
    view::TextFieldSpec,
};
use tracing::trace;

use crate::theme::{ThemeColors, use_theme};

/// Defaults shared by [`text_input`] and [`text_area`](crate::text_area::text_area).
pub struct TextInputDefaults;

impl TextInputDefaults {
    /// Corner radius of the field.
    pub const CORNER_RADIUS: Dp = Dp(8.0);
    /// Height of a single-line field.
    pub const HEIGHT: Dp = Dp(48.0);
    /// Border color when nothing else applies, `#DDDDDD`.
    pub const BORDER: Color = Color::from_rgb8(0xDD, 0xDD, 0xDD);
    /// Field fill when enabled.
    pub const FILL: Color = Color::WHITE;
}

/// Arguments for [`text_input`].
#[derive(Clone, PartialEq, Setters)]
pub struct TextInputArgs {
    /// Key of the container; the field is `{key}.field`.
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
    /// Error message below the field; also turns the border red.
    #[setters(strip_option, into)]
    pub error: Option<String>,
    /// Icon before the text.
    #[setters(strip_option)]
    pub left_icon: Option<ViewNode>,
    /// Icon after the text.
    #[setters(strip_option)]
    pub right_icon: Option<ViewNode>,
    /// Reject input and grey out.
    pub disabled: bool,
    /// Called with the edited text.
    #[setters(skip)]
    pub on_change_text: Option<CallbackWith<String>>,
    /// Called when the field gains focus.
    #[setters(skip)]
    pub on_focus: Option<CallbackWith<()>>,
    /// Called when the field loses focus.
    #[setters(skip)]
    pub on_blur: Option<CallbackWith<()>>,
    /// Extra container style.
    pub container_style: Style,
    /// Extra field style.
    pub input_style: Style,
    /// Extra label style.
    pub label_style: Style,
    /// Extra error style.
    pub error_style: Style,
    /// Optional external controller.
    #[setters(skip)]
    pub controller: Option<State<TextInputController>>,
}

impl Default for TextInputArgs {
    fn default() -> Self {
        Self {
            key: "text_input".to_string(),
            value: String::new(),
            placeholder: None,
            label: None,
            error: None,
            left_icon: None,
            right_icon: None,
            disabled: false,
            on_change_text: None,
            on_focus: None,
            on_blur: None,
            container_style: Style::default(),
            input_style: Style::default(),
            label_style: Style::default(),
            error_style: Style::default(),
            controller: None,
        }
    }
}

impl TextInputArgs {
    /// Sets the edit handler.
    pub fn on_change_text<F>(mut self, f: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_change_text = Some(CallbackWith::new(f));
        self
    }

    /// Sets the focus handler.
    pub fn on_focus<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_focus = Some(CallbackWith::new(move |()| f()));
        self
    }

    /// Sets the blur handler.
    pub fn on_blur<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_blur = Some(CallbackWith::new(move |()| f()));
        self
    }

    /// Uses an external controller.
    pub fn controller(mut self, controller: State<TextInputController>) -> Self {
        self.controller = Some(controller);
        self
    }
}

/// Focus state of a text field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TextInputController {
    focused: bool,
}

impl TextInputController {
    /// Creates an unfocused controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Records a focus change.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

/// Border and fill of a field box. Error wins over focus, focus over
/// disabled.
pub(crate) fn field_box_style(
    colors: &ThemeColors,
    error: bool,
    focused: bool,
    disabled: bool,
) -> Style {
    let style = Style::new()
        .border_width(Dp(1.0))
        .border_radius(TextInputDefaults::CORNER_RADIUS)
        .border_color(TextInputDefaults::BORDER)
        .background(TextInputDefaults::FILL);
    if error {
        style.border_color(colors.danger)
    } else if focused {
        style.border_color(colors.primary)
    } else if disabled {
        style.border_color(colors.border).background(colors.light)
    } else {
        style
    }
}

pub(crate) fn field_label(label: &str, disabled: bool, colors: &ThemeColors, extra: &Style) -> ViewNode {
    ViewNode::text(label).style(
        Style::new()
            .font_size(Dp(16.0))
            .margin(Edges {
                bottom: Dp(8.0),
                ..Edges::default()
            })
            .color(if disabled { colors.disabled } else { colors.text })
            .merge(extra),
    )
}

pub(crate) fn field_error(error: &str, colors: &ThemeColors, extra: &Style) -> ViewNode {
    ViewNode::text(error).style(
        Style::new()
            .font_size(Dp(14.0))
            .color(colors.danger)
            .merge(extra),
    )
}

fn icon_slot(icon: &ViewNode) -> ViewNode {
    ViewNode::view()
        .style(Style::new().padding(Edges::all(Dp(12.0))))
        .child(icon.clone())
}

/// Renders a text input.
pub fn text_input(args: &TextInputArgs) -> ViewNode {
    let controller = args
        .controller
        .clone()
        .unwrap_or_else(|| remember_with_key(&args.key, TextInputController::new));
    let focused = controller.with(TextInputController::is_focused);
    let colors = use_theme().colors;

    let mut padding = Edges::symmetric(Dp::ZERO, Dp(16.0));
    if args.left_icon.is_some() {
        padding.left = Dp(8.0);
    }
    if args.right_icon.is_some() {
        padding.right = Dp(8.0);
    }

    let mut field = ViewNode::text_field(TextFieldSpec {
        value: args.value.clone(),
        placeholder: args.placeholder.clone(),
        placeholder_color: Some(colors.text_light),
        multiline: false,
        editable: !args.disabled,
        max_length: None,
    })
    .key(format!("{}.field", args.key))
    .disabled(args.disabled)
    .style(
        Style::new()
            .flex(1.0)
            .height(TextInputDefaults::HEIGHT)
            .padding(padding)
            .font_size(Dp(16.0))
            .color(if args.disabled { colors.disabled } else { colors.text })
            .merge(&args.input_style),
    );
    if let Some(on_change_text) = &args.on_change_text {
        field = field.on_change_text(on_change_text.clone());
    }
    let on_focus = args.on_focus.clone();
    let on_blur = args.on_blur.clone();
    field = field.on_focus_change(move |gained: bool| {
        controller.with_mut(|c| c.set_focused(gained));
        trace!(gained, "text input focus changed");
        let handler = if gained { &on_focus } else { &on_blur };
        if let Some(handler) = handler {
            handler.call(());
        }
    });

    let input_row = ViewNode::view()
        .key(format!("{}.box", args.key))
        .style(
            field_box_style(&colors, args.error.is_some(), focused, args.disabled)
                .flex_direction(FlexDirection::Row)
                .align_items(Align::Center),
        )
        .child_opt(args.left_icon.as_ref().map(icon_slot))
        .child(field)
        .child_opt(args.right_icon.as_ref().map(icon_slot));

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
        .child(input_row)
        .child_opt(args.error.as_deref().map(|error| {
            field_error(error, &colors, &args.error_style).merge_style(&Style::new().margin(Edges {
                top: Dp(4.0),
                ..Edges::default()
            }))
        }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_priority() {
        let colors = ThemeColors::default();
        let error = field_box_style(&colors, true, true, true);
        assert_eq!(error.border_color, Some(colors.danger));
        let focused = field_box_style(&colors, false, true, true);
        assert_eq!(focused.border_color, Some(colors.primary));
        let disabled = field_box_style(&colors, false, false, true);
        assert_eq!(disabled.border_color, Some(colors.border));
        assert_eq!(disabled.background, Some(colors.light));
        let idle = field_box_style(&colors, false, false, false);
        assert_eq!(idle.border_color, Some(TextInputDefaults::BORDER));
    }

    #[test]
    fn icons_tighten_padding() {
        let node = text_input(
            &TextInputArgs::default()
                .key("text-input-icons")
                .left_icon(ViewNode::text("@")),
        );
        let field = node.find("text-input-icons.field").unwrap();
        let padding = field.style.padding.unwrap();
        assert_eq!(padding.left, Dp(8.0));
        assert_eq!(padding.right, Dp(16.0));
    }

    #[test]
    fn focus_handler_updates_controller() {
        let controller = State::new(TextInputController::new());
        let node = text_input(&TextInputArgs::default().controller(controller.clone()));
        let field = node.find("text_input.field").unwrap();
        field.handlers.on_focus_change.as_ref().unwrap().call(true);
        assert!(controller.with(TextInputController::is_focused));
    }
}
