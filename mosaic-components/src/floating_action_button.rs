//! A circular floating action button.
//!
//! ## Usage
//!
//! Use for the single most important action on a screen.

use derive_setters::Setters;
use mosaic_ui::{
    Callback, Color, Dp, Style, ViewNode,
    style::{Align, Justify, Shadow},
};

use crate::theme::use_theme;

/// Diameter presets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FabSize {
    /// 40dp.
    Small,
    /// 56dp.
    #[default]
    Normal,
    /// 72dp.
    Large,
}

impl FabSize {
    /// Diameter of this preset.
    pub fn diameter(self) -> Dp {
        match self {
            FabSize::Small => Dp(40.0),
            FabSize::Normal => Dp(56.0),
            FabSize::Large => Dp(72.0),
        }
    }
}

/// Arguments for [`floating_action_button`].
#[derive(Clone, PartialEq, Setters)]
pub struct FabArgs {
    /// Dispatch key.
    #[setters(into)]
    pub key: String,
    /// Icon content.
    #[setters(strip_option)]
    pub icon: Option<ViewNode>,
    /// Press handler.
    #[setters(skip)]
    pub on_press: Option<Callback>,
    /// Diameter preset.
    pub size: FabSize,
    /// Fill color; theme `primary` when unset.
    #[setters(strip_option)]
    pub color: Option<Color>,
    /// Extra style, applied last.
    pub style: Style,
}

impl Default for FabArgs {
    fn default() -> Self {
        Self {
            key: "fab".to_string(),
            icon: None,
            on_press: None,
            size: FabSize::default(),
            color: None,
            style: Style::default(),
        }
    }
}

impl FabArgs {
    /// Sets the press handler.
    pub fn on_press(mut self, on_press: impl Into<Callback>) -> Self {
        self.on_press = Some(on_press.into());
        self
    }
}

/// Renders a floating action button.
pub fn floating_action_button(args: &FabArgs) -> ViewNode {
    let diameter = args.size.diameter();
    let color = args.color.unwrap_or_else(|| use_theme().colors.primary);
    let mut node = ViewNode::pressable()
        .key(args.key.clone())
        .style(
            Style::new()
                .size(diameter, diameter)
                .border_radius(diameter / 2.0)
                .background(color)
                .align_items(Align::Center)
                .justify_content(Justify::Center)
                .elevation(Dp(6.0))
                .shadow(Shadow::drop(0.24, Dp(4.0)))
                .merge(&args.style),
        )
        .child_opt(args.icon.clone());
    if let Some(on_press) = &args.on_press {
        node = node.on_press(on_press.clone());
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_fab_is_circular() {
        let node = floating_action_button(&FabArgs::default().size(FabSize::Large));
        assert_eq!(node.style.width, Some(Dp(72.0).into()));
        assert_eq!(node.style.border_radius, Some(Dp(36.0)));
        assert_eq!(node.style.background, Some(use_theme().colors.primary));
    }
}
