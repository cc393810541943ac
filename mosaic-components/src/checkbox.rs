//! A checkbox with an optional label.
//!
//! ## Usage
//!
//! Use in forms and settings for independent boolean choices. The checkbox
//! is controlled: a press reports `!checked` and the caller stores it.

use derive_setters::Setters;
use mosaic_ui::{
    CallbackWith, Dp, Style, ViewNode,
    style::{Align, Edges, FlexDirection, Justify, TransformOp},
};

use crate::theme::{ThemeColors, use_theme};

/// Defaults for [`checkbox`].
pub struct CheckboxDefaults;

impl CheckboxDefaults {
    /// Box side length.
    pub const SIZE: Dp = Dp(24.0);
    /// Border and check-mark stroke width.
    pub const STROKE: Dp = Dp(2.0);
    /// Gap between the box and the label.
    pub const LABEL_SPACING: Dp = Dp(8.0);
}

/// Arguments for [`checkbox`].
#[derive(Clone, PartialEq, Setters)]
pub struct CheckboxArgs {
    /// Dispatch key; the box is `{key}.box` and the mark `{key}.mark`.
    #[setters(into)]
    pub key: String,
    /// Whether the box is checked.
    pub checked: bool,
    /// Called with the toggled value.
    #[setters(skip)]
    pub on_press: Option<CallbackWith<bool>>,
    /// Optional label.
    #[setters(strip_option, into)]
    pub label: Option<String>,
    /// Ignore presses and dim.
    pub disabled: bool,
    /// Box side length.
    pub size: Dp,
    /// Extra style for the row.
    pub style: Style,
    /// Extra style for the label.
    pub label_style: Style,
}

impl Default for CheckboxArgs {
    fn default() -> Self {
        Self {
            key: "checkbox".to_string(),
            checked: false,
            on_press: None,
            label: None,
            disabled: false,
            size: CheckboxDefaults::SIZE,
            style: Style::default(),
            label_style: Style::default(),
        }
    }
}

impl CheckboxArgs {
    /// Sets the toggle handler.
    pub fn on_press<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_press = Some(CallbackWith::new(f));
        self
    }

    fn box_style(&self, colors: &ThemeColors) -> Style {
        let (fill, border) = if self.checked {
            (colors.primary, colors.primary)
        } else {
            (colors.background, colors.border)
        };
        Style::new()
            .size(self.size, self.size)
            .border_radius(self.size * 0.15)
            .background(fill)
            .border_width(CheckboxDefaults::STROKE)
            .border_color(border)
            .justify_content(Justify::Center)
            .align_items(Align::Center)
            .opacity(if self.disabled { 0.5 } else { 1.0 })
    }
}

/// Renders a checkbox.
pub fn checkbox(args: &CheckboxArgs) -> ViewNode {
    let colors = use_theme().colors;
    let mark = args.checked.then(|| {
        ViewNode::view().key(format!("{}.mark", args.key)).style(
            Style::new()
                .size(args.size * 0.5, args.size * 0.25)
                .border_width(CheckboxDefaults::STROKE)
                .border_color(colors.background)
                .margin(Edges {
                    top: -(args.size * 0.05),
                    ..Edges::default()
                })
                .transform(TransformOp::Rotate(-45.0)),
        )
    });
    let check_box = ViewNode::view()
        .key(format!("{}.box", args.key))
        .style(args.box_style(&colors))
        .child_opt(mark);
    let label = args.label.as_ref().map(|label| {
        ViewNode::text(label.clone()).style(
            Style::new()
                .margin(Edges {
                    left: CheckboxDefaults::LABEL_SPACING,
                    ..Edges::default()
                })
                .font_size(Dp(16.0))
                .color(if args.disabled { colors.disabled } else { colors.text })
                .merge(&args.label_style),
        )
    });

    let checked = args.checked;
    let disabled = args.disabled;
    let on_press = args.on_press.clone();
    ViewNode::pressable()
        .key(args.key.clone())
        .disabled(args.disabled)
        .style(
            Style::new()
                .flex_direction(FlexDirection::Row)
                .align_items(Align::Center)
                .margin(Edges::symmetric(Dp(4.0), Dp::ZERO))
                .merge(&args.style),
        )
        .on_press(move || {
            if disabled {
                return;
            }
            if let Some(on_press) = &on_press {
                on_press.call(!checked);
            }
        })
        .child(check_box)
        .child_opt(label)
}

#[cfg(test)]
mod tests {
    use mosaic_ui::testing::CallRecorder;

    use super::*;

    #[test]
    fn mark_only_when_checked() {
        let unchecked = checkbox(&CheckboxArgs::default());
        assert!(unchecked.find("checkbox.mark").is_none());
        let checked = checkbox(&CheckboxArgs::default().checked(true));
        assert!(checked.find("checkbox.mark").is_some());
    }

    #[test]
    fn press_reports_toggled_value() {
        let recorder = CallRecorder::new();
        let cb = recorder.callback();
        let node = checkbox(&CheckboxArgs::default().checked(true).on_press(move |v| cb.call(v)));
        node.handlers.on_press.as_ref().unwrap().call();
        assert_eq!(recorder.calls(), vec![false]);
    }

    #[test]
    fn box_radius_scales_with_size() {
        let colors = ThemeColors::default();
        let style = CheckboxArgs::default().size(Dp(40.0)).box_style(&colors);
        assert_eq!(style.border_radius, Some(Dp(6.0)));
        assert_eq!(style.border_color, Some(colors.border));
    }
}
