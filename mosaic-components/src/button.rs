//! A pressable button with a text label and an optional icon.
//!
//! ## Usage
//!
//! Use for primary and secondary actions. Pick a [`ButtonVariant`] to set
//! emphasis: filled for the main action, outlined or text for the rest.

use derive_setters::Setters;
use mosaic_ui::{
    Callback, Color, Dp, Style, ViewNode,
    style::{Align, Edges, FlexDirection, Justify, TextAlign},
};

use crate::theme::{ThemeColors, use_theme};

/// Defaults for [`button`].
pub struct ButtonDefaults;

impl ButtonDefaults {
    /// Corner radius.
    pub const CORNER_RADIUS: Dp = Dp(8.0);
    /// Opacity applied when disabled.
    pub const DISABLED_OPACITY: f32 = 0.5;
    /// Horizontal margin around the icon.
    pub const ICON_SPACING: Dp = Dp(8.0);
}

/// Size presets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    /// Padding 8/16, 14pt label.
    Small,
    /// Padding 12/24, 16pt label.
    #[default]
    Medium,
    /// Padding 16/32, 18pt label.
    Large,
}

impl ButtonSize {
    /// Vertical and horizontal padding.
    pub fn padding(self) -> Edges {
        let (v, h) = match self {
            ButtonSize::Small => (8.0, 16.0),
            ButtonSize::Medium => (12.0, 24.0),
            ButtonSize::Large => (16.0, 32.0),
        };
        Edges::symmetric(Dp(v), Dp(h))
    }

    /// Label font size.
    pub fn font_size(self) -> Dp {
        match self {
            ButtonSize::Small => Dp(14.0),
            ButtonSize::Medium => Dp(16.0),
            ButtonSize::Large => Dp(18.0),
        }
    }
}

/// Visual emphasis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid primary background.
    #[default]
    Filled,
    /// Transparent with a 1dp primary border.
    Outlined,
    /// Transparent, label only.
    Text,
}

/// Side of the label the icon sits on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IconPosition {
    /// Before the label.
    #[default]
    Left,
    /// After the label.
    Right,
}

/// Arguments for [`button`].
#[derive(Clone, PartialEq, Setters)]
pub struct ButtonArgs {
    /// Dispatch key.
    #[setters(into)]
    pub key: String,
    /// Label text.
    #[setters(into)]
    pub label: String,
    /// Size preset.
    pub size: ButtonSize,
    /// Visual emphasis.
    pub variant: ButtonVariant,
    /// Optional icon content.
    #[setters(strip_option)]
    pub icon: Option<ViewNode>,
    /// Side of the icon.
    pub icon_position: IconPosition,
    /// Ignore presses and dim.
    pub disabled: bool,
    /// Press handler.
    #[setters(skip)]
    pub on_press: Option<Callback>,
    /// Long-press handler.
    #[setters(skip)]
    pub on_long_press: Option<Callback>,
    /// Extra container style, applied last.
    pub style: Style,
    /// Extra label style, applied last.
    pub label_style: Style,
}

impl Default for ButtonArgs {
    fn default() -> Self {
        Self {
            key: "button".to_string(),
            label: String::new(),
            size: ButtonSize::default(),
            variant: ButtonVariant::default(),
            icon: None,
            icon_position: IconPosition::default(),
            disabled: false,
            on_press: None,
            on_long_press: None,
            style: Style::default(),
            label_style: Style::default(),
        }
    }
}

impl ButtonArgs {
    /// A filled button with a label and press handler.
    pub fn filled(label: impl Into<String>, on_press: impl Into<Callback>) -> Self {
        Self::default().label(label).on_press(on_press)
    }

    /// Sets the press handler.
    pub fn on_press(mut self, on_press: impl Into<Callback>) -> Self {
        self.on_press = Some(on_press.into());
        self
    }

    /// Sets the long-press handler.
    pub fn on_long_press(mut self, on_long_press: impl Into<Callback>) -> Self {
        self.on_long_press = Some(on_long_press.into());
        self
    }

    fn container_style(&self, colors: &ThemeColors) -> Style {
        let mut style = Style::new()
            .border_radius(ButtonDefaults::CORNER_RADIUS)
            .justify_content(Justify::Center)
            .align_items(Align::Center)
            .padding(self.size.padding());
        style = match self.variant {
            ButtonVariant::Filled => style.background(if self.disabled {
                colors.disabled
            } else {
                colors.primary
            }),
            ButtonVariant::Outlined => style
                .background(Color::TRANSPARENT)
                .border_width(Dp(1.0))
                .border_color(if self.disabled {
                    colors.disabled
                } else {
                    colors.primary
                }),
            ButtonVariant::Text => style
                .background(Color::TRANSPARENT)
                .border_width(Dp::ZERO),
        };
        if self.disabled {
            style = style.opacity(ButtonDefaults::DISABLED_OPACITY);
        }
        style.merge(&self.style)
    }

    fn label_color(&self, colors: &ThemeColors) -> Color {
        match (self.variant, self.disabled) {
            (ButtonVariant::Filled, true) => colors.text_light,
            (ButtonVariant::Filled, false) => colors.background,
            (_, true) => colors.disabled,
            (_, false) => colors.primary,
        }
    }
}

/// Renders a button.
pub fn button(args: &ButtonArgs) -> ViewNode {
    let colors = use_theme().colors;
    let label = ViewNode::text(args.label.clone()).style(
        Style::new()
            .text_align(TextAlign::Center)
            .font_size(args.size.font_size())
            .color(args.label_color(&colors))
            .merge(&args.label_style),
    );
    let icon = args.icon.clone().map(|icon| {
        ViewNode::view()
            .style(Style::new().margin(Edges::symmetric(Dp::ZERO, ButtonDefaults::ICON_SPACING)))
            .child(icon)
    });

    let content = ViewNode::view().style(
        Style::new()
            .flex_direction(FlexDirection::Row)
            .align_items(Align::Center)
            .justify_content(Justify::Center),
    );
    let content = match args.icon_position {
        IconPosition::Left => content.child_opt(icon).child(label),
        IconPosition::Right => content.child(label).child_opt(icon),
    };

    let mut node = ViewNode::pressable()
        .key(args.key.clone())
        .disabled(args.disabled)
        .style(args.container_style(&colors))
        .child(content);
    if let Some(on_press) = &args.on_press {
        node = node.on_press(on_press.clone());
    }
    if let Some(on_long_press) = &args.on_long_press {
        node = node.on_long_press(on_long_press.clone());
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_presets() {
        assert_eq!(ButtonSize::Small.padding(), Edges::symmetric(Dp(8.0), Dp(16.0)));
        assert_eq!(ButtonSize::Large.font_size(), Dp(18.0));
    }

    #[test]
    fn filled_label_uses_background_color() {
        let colors = ThemeColors::default();
        let args = ButtonArgs::default();
        assert_eq!(args.label_color(&colors), colors.background);
        assert_eq!(args.clone().disabled(true).label_color(&colors), colors.text_light);
        let outlined = args.variant(ButtonVariant::Outlined);
        assert_eq!(outlined.label_color(&colors), colors.primary);
        let style = outlined.container_style(&colors);
        assert_eq!(style.border_color, Some(colors.primary));
        assert_eq!(style.background, Some(Color::TRANSPARENT));
    }

    #[test]
    fn disabled_button_is_dimmed() {
        let colors = ThemeColors::default();
        let style = ButtonArgs::default().disabled(true).container_style(&colors);
        assert_eq!(style.opacity, Some(0.5));
        assert_eq!(style.background, Some(colors.disabled));
    }

    #[test]
    fn icon_follows_position() {
        let icon = ViewNode::text("+");
        let node = button(
            &ButtonArgs::default()
                .label("Add")
                .icon(icon)
                .icon_position(IconPosition::Right),
        );
        assert_eq!(node.text_content(), "Add +");
    }
}
