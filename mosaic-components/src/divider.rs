//! Thin separator lines.
//!
//! ## Usage
//!
//! Separate sections in lists, menus and settings screens.

use derive_setters::Setters;
use mosaic_ui::{Color, DimensionValue, Dp, Style, ViewNode, style::Align};

/// Defaults for [`divider`].
pub struct DividerDefaults;

impl DividerDefaults {
    /// Line thickness.
    pub const THICKNESS: Dp = Dp(1.0);
    /// Line color, `#E0E0E0`.
    pub const COLOR: Color = Color::from_rgb8(0xE0, 0xE0, 0xE0);
}

/// Direction of the line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DividerOrientation {
    /// A horizontal rule.
    #[default]
    Horizontal,
    /// A vertical rule.
    Vertical,
}

/// Arguments for [`divider`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct DividerArgs {
    /// Line direction.
    pub orientation: DividerOrientation,
    /// Line color.
    pub color: Color,
    /// Cross-axis thickness.
    pub thickness: Dp,
    /// Main-axis length; the full parent length when unset.
    #[setters(strip_option, into)]
    pub length: Option<DimensionValue>,
    /// Extra style, applied last.
    pub style: Style,
}

impl Default for DividerArgs {
    fn default() -> Self {
        Self {
            orientation: DividerOrientation::default(),
            color: DividerDefaults::COLOR,
            thickness: DividerDefaults::THICKNESS,
            length: None,
            style: Style::default(),
        }
    }
}

/// Renders a divider.
pub fn divider(args: &DividerArgs) -> ViewNode {
    let length = args.length.unwrap_or(DimensionValue::FULL);
    let style = Style::new().align_self(Align::Center).background(args.color);
    let style = match args.orientation {
        DividerOrientation::Horizontal => style.height(args.thickness).width(length),
        DividerOrientation::Vertical => style.width(args.thickness).height(length),
    };
    ViewNode::view().style(style.merge(&args.style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_swaps_axes() {
        let node = divider(
            &DividerArgs::default()
                .orientation(DividerOrientation::Vertical)
                .thickness(Dp(2.0)),
        );
        assert_eq!(node.style.width, Some(Dp(2.0).into()));
        assert_eq!(node.style.height, Some(DimensionValue::FULL));
        assert_eq!(node.style.background.map(Color::to_hex).as_deref(), Some("#E0E0E0"));
    }
}
