//! Radio buttons and a group that coordinates them.
//!
//! ## Usage
//!
//! Use for one choice out of a small set. Build the options as
//! [`RadioButtonArgs`] and hand them to [`radio_group`], which marks the one
//! matching `selected_value` and routes presses to `on_value_change`.

use derive_setters::Setters;
use mosaic_ui::{
    CallbackWith, Dp, Style, ViewNode,
    style::{Align, Edges, FlexDirection, Justify},
};

use crate::theme::{ThemeColors, use_theme};

/// Defaults for [`radio_button`].
pub struct RadioButtonDefaults;

impl RadioButtonDefaults {
    /// Outer ring diameter.
    pub const SIZE: Dp = Dp(20.0);
    /// Ring stroke width.
    pub const STROKE: Dp = Dp(2.0);
}

/// Arguments for [`radio_button`].
#[derive(Clone, PartialEq, Setters)]
pub struct RadioButtonArgs {
    /// Dispatch key; the ring is `{key}.ring` and the dot `{key}.dot`.
    #[setters(into)]
    pub key: String,
    /// Value reported on selection.
    #[setters(into)]
    pub value: String,
    /// Optional label.
    #[setters(strip_option, into)]
    pub label: Option<String>,
    /// Whether this option is selected.
    pub selected: bool,
    /// Ignore presses and grey out.
    pub disabled: bool,
    /// Called with `value` when pressed.
    #[setters(skip)]
    pub on_select: Option<CallbackWith<String>>,
    /// Ring diameter.
    pub size: Dp,
    /// Extra style for the row.
    pub style: Style,
    /// Extra style for the label.
    pub label_style: Style,
}

impl Default for RadioButtonArgs {
    fn default() -> Self {
        Self {
            key: "radio_button".to_string(),
            value: String::new(),
            label: None,
            selected: false,
            disabled: false,
            on_select: None,
            size: RadioButtonDefaults::SIZE,
            style: Style::default(),
            label_style: Style::default(),
        }
    }
}

impl RadioButtonArgs {
    /// An option with a value and a label; the key is derived from the value.
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        let value = value.into();
        Self::default()
            .key(format!("radio.{value}"))
            .value(value)
            .label(label)
    }

    /// Sets the selection handler.
    pub fn on_select<F>(mut self, f: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_select = Some(CallbackWith::new(f));
        self
    }

    fn ring_color(&self, colors: &ThemeColors) -> mosaic_ui::Color {
        if self.disabled {
            colors.disabled
        } else if self.selected {
            colors.primary
        } else {
            colors.border
        }
    }
}

/// Renders a single radio button.
pub fn radio_button(args: &RadioButtonArgs) -> ViewNode {
    let colors = use_theme().colors;
    let dot_size = args.size * 0.5;
    let dot = args.selected.then(|| {
        ViewNode::view().key(format!("{}.dot", args.key)).style(
            Style::new()
                .size(dot_size, dot_size)
                .border_radius(dot_size / 2.0)
                .background(if args.disabled { colors.disabled } else { colors.primary }),
        )
    });
    let ring = ViewNode::view()
        .key(format!("{}.ring", args.key))
        .style(
            Style::new()
                .size(args.size, args.size)
                .border_radius(args.size / 2.0)
                .border_width(RadioButtonDefaults::STROKE)
                .border_color(args.ring_color(&colors))
                .justify_content(Justify::Center)
                .align_items(Align::Center),
        )
        .child_opt(dot);
    let label = args.label.as_ref().map(|label| {
        ViewNode::text(label.clone()).style(
            Style::new()
                .margin(Edges {
                    left: Dp(8.0),
                    ..Edges::default()
                })
                .font_size(Dp(16.0))
                .color(if args.disabled { colors.disabled } else { colors.text })
                .merge(&args.label_style),
        )
    });

    let disabled = args.disabled;
    let value = args.value.clone();
    let on_select = args.on_select.clone();
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
            if let Some(on_select) = &on_select {
                on_select.call(value.clone());
            }
        })
        .child(ring)
        .child_opt(label)
}

/// Arguments for [`radio_group`].
#[derive(Clone, PartialEq, Setters)]
pub struct RadioGroupArgs {
    /// Dispatch key of the group container.
    #[setters(into)]
    pub key: String,
    /// Value of the selected option.
    #[setters(strip_option, into)]
    pub selected_value: Option<String>,
    /// Called with the pressed option's value.
    #[setters(skip)]
    pub on_value_change: Option<CallbackWith<String>>,
    /// Extra style for the container.
    pub style: Style,
}

impl Default for RadioGroupArgs {
    fn default() -> Self {
        Self {
            key: "radio_group".to_string(),
            selected_value: None,
            on_value_change: None,
            style: Style::default(),
        }
    }
}

impl RadioGroupArgs {
    /// Sets the value-change handler.
    pub fn on_value_change<F>(mut self, f: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_value_change = Some(CallbackWith::new(f));
        self
    }
}

/// Renders `options` in a column. Each option's `selected` and `on_select`
/// are replaced by the group's.
pub fn radio_group(
    args: &RadioGroupArgs,
    options: impl IntoIterator<Item = RadioButtonArgs>,
) -> ViewNode {
    let buttons = options.into_iter().map(|mut option| {
        option.selected = args.selected_value.as_deref() == Some(option.value.as_str());
        option.on_select = args.on_value_change.clone();
        radio_button(&option)
    });
    ViewNode::view()
        .key(args.key.clone())
        .style(
            Style::new()
                .margin(Edges::symmetric(Dp(8.0), Dp::ZERO))
                .merge(&args.style),
        )
        .children(buttons)
}

#[cfg(test)]
mod tests {
    use mosaic_ui::testing::CallRecorder;

    use super::*;

    fn options() -> Vec<RadioButtonArgs> {
        vec![
            RadioButtonArgs::option("a", "Alpha"),
            RadioButtonArgs::option("b", "Beta"),
            RadioButtonArgs::option("c", "Gamma").disabled(true),
        ]
    }

    #[test]
    fn group_marks_matching_option() {
        let group = radio_group(&RadioGroupArgs::default().selected_value("b"), options());
        assert!(group.find("radio.a.dot").is_none());
        assert!(group.find("radio.b.dot").is_some());
    }

    #[test]
    fn group_routes_presses_except_disabled() {
        let recorder = CallRecorder::new();
        let cb = recorder.callback();
        let group = radio_group(
            &RadioGroupArgs::default().on_value_change(move |v| cb.call(v)),
            options(),
        );
        for key in ["radio.a", "radio.c"] {
            let node = group.find(key).unwrap();
            node.handlers.on_press.as_ref().unwrap().call();
        }
        assert_eq!(recorder.calls(), vec!["a".to_string()]);
    }

    #[test]
    fn dot_is_half_the_ring() {
        let node = radio_button(&RadioButtonArgs::default().selected(true).size(Dp(30.0)));
        let dot = node.find("radio_button.dot").unwrap();
        assert_eq!(dot.style.width, Some(Dp(15.0).into()));
        assert_eq!(dot.style.border_radius, Some(Dp(7.5)));
    }
}
