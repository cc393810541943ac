//! Declarative style attributes attached to view nodes.
//!
//! A [`Style`] mirrors what a native view host understands: box dimensions,
//! spacing, colors, borders, transforms and text attributes. Unset fields are
//! left to the host's defaults. Styles compose with [`Style::merge`], where
//! later layers win field by field.

use derive_setters::Setters;
use smallvec::SmallVec;

use crate::{Color, Dp};

/// A length that may depend on the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimensionValue {
    /// A fixed length.
    Fixed(Dp),
    /// A percentage of the parent's length, `0.0..=100.0`.
    Percent(f32),
}

impl DimensionValue {
    /// The full parent length.
    pub const FULL: DimensionValue = DimensionValue::Percent(100.0);

    /// Returns the fixed length, if this is one.
    pub fn fixed(self) -> Option<Dp> {
        match self {
            DimensionValue::Fixed(dp) => Some(dp),
            DimensionValue::Percent(_) => None,
        }
    }
}

impl From<Dp> for DimensionValue {
    fn from(dp: Dp) -> Self {
        DimensionValue::Fixed(dp)
    }
}

/// Main axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    /// Children stack vertically.
    #[default]
    Column,
    /// Children flow horizontally.
    Row,
}

/// Cross-axis alignment of children, or of a node within its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Align to the start edge.
    Start,
    /// Center.
    Center,
    /// Align to the end edge.
    End,
    /// Stretch to fill.
    Stretch,
}

/// Main-axis distribution of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// Pack at the start.
    Start,
    /// Pack in the center.
    Center,
    /// Pack at the end.
    End,
    /// Distribute with the free space between children.
    SpaceBetween,
}

/// Positioning scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Participates in the parent's flow.
    Relative,
    /// Placed by [`Style::inset`] relative to the parent.
    Absolute,
}

/// Font weight for text nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    /// Regular weight.
    Normal,
    /// Semi-bold (600).
    SemiBold,
    /// Bold.
    Bold,
}

/// Case transformation for text nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTransform {
    /// Render as uppercase.
    Uppercase,
    /// Render as lowercase.
    Lowercase,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

/// A single transform operation. Lengths are in dp, rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    /// Horizontal translation.
    TranslateX(f32),
    /// Vertical translation.
    TranslateY(f32),
    /// Uniform scale.
    Scale(f32),
    /// Vertical scale.
    ScaleY(f32),
    /// Clockwise rotation in degrees.
    Rotate(f32),
}

/// Per-edge lengths for padding and margin.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Edges {
    /// Top edge.
    pub top: Dp,
    /// Right edge.
    pub right: Dp,
    /// Bottom edge.
    pub bottom: Dp,
    /// Left edge.
    pub left: Dp,
}

impl Edges {
    /// The same length on every edge.
    pub const fn all(value: Dp) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical and horizontal lengths.
    pub const fn symmetric(vertical: Dp, horizontal: Dp) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Absolute offsets from the parent edges.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Inset {
    /// Offset from the top edge.
    pub top: Option<Dp>,
    /// Offset from the right edge.
    pub right: Option<Dp>,
    /// Offset from the bottom edge.
    pub bottom: Option<Dp>,
    /// Offset from the left edge.
    pub left: Option<Dp>,
}

/// Drop shadow for platforms that draw shadows explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Color,
    /// Horizontal offset.
    pub offset_x: Dp,
    /// Vertical offset.
    pub offset_y: Dp,
    /// Shadow opacity.
    pub opacity: f32,
    /// Blur radius.
    pub radius: Dp,
}

impl Shadow {
    /// A black shadow offset 2dp downward.
    pub const fn drop(opacity: f32, radius: Dp) -> Self {
        Self {
            color: Color::BLACK,
            offset_x: Dp::ZERO,
            offset_y: Dp(2.0),
            opacity,
            radius,
        }
    }
}

/// Style attributes for a view node.
#[derive(Debug, Default, Clone, PartialEq, Setters)]
pub struct Style {
    /// Box width.
    #[setters(strip_option, into)]
    pub width: Option<DimensionValue>,
    /// Box height.
    #[setters(strip_option, into)]
    pub height: Option<DimensionValue>,
    /// Maximum box width.
    #[setters(strip_option, into)]
    pub max_width: Option<DimensionValue>,
    /// Flex grow factor.
    #[setters(strip_option)]
    pub flex: Option<f32>,
    /// Main axis for children.
    #[setters(strip_option)]
    pub flex_direction: Option<FlexDirection>,
    /// Cross-axis alignment of children.
    #[setters(strip_option)]
    pub align_items: Option<Align>,
    /// Cross-axis alignment of this node within its parent.
    #[setters(strip_option)]
    pub align_self: Option<Align>,
    /// Main-axis distribution of children.
    #[setters(strip_option)]
    pub justify_content: Option<Justify>,
    /// Spacing between children.
    #[setters(strip_option)]
    pub gap: Option<Dp>,
    /// Inner spacing.
    #[setters(strip_option)]
    pub padding: Option<Edges>,
    /// Outer spacing.
    #[setters(strip_option)]
    pub margin: Option<Edges>,
    /// Positioning scheme.
    #[setters(strip_option)]
    pub position: Option<Position>,
    /// Absolute offsets.
    #[setters(strip_option)]
    pub inset: Option<Inset>,
    /// Background fill.
    #[setters(strip_option)]
    pub background: Option<Color>,
    /// Border width.
    #[setters(strip_option)]
    pub border_width: Option<Dp>,
    /// Border color.
    #[setters(strip_option)]
    pub border_color: Option<Color>,
    /// Corner radius.
    #[setters(strip_option)]
    pub border_radius: Option<Dp>,
    /// Opacity, `0.0..=1.0`.
    #[setters(strip_option)]
    pub opacity: Option<f32>,
    /// Transform operations, applied in order.
    #[setters(skip)]
    pub transform: SmallVec<[TransformOp; 2]>,
    /// Android-style elevation.
    #[setters(strip_option)]
    pub elevation: Option<Dp>,
    /// Explicit drop shadow.
    #[setters(strip_option)]
    pub shadow: Option<Shadow>,
    /// Clip children to the node bounds.
    pub overflow_hidden: bool,
    /// Text color.
    #[setters(strip_option)]
    pub color: Option<Color>,
    /// Text size.
    #[setters(strip_option)]
    pub font_size: Option<Dp>,
    /// Text weight.
    #[setters(strip_option)]
    pub font_weight: Option<FontWeight>,
    /// Text case transformation.
    #[setters(strip_option)]
    pub text_transform: Option<TextTransform>,
    /// Text alignment.
    #[setters(strip_option)]
    pub text_align: Option<TextAlign>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transform operation.
    pub fn transform(mut self, op: TransformOp) -> Self {
        self.transform.push(op);
        self
    }

    /// Shorthand for a fixed width and height.
    pub fn size(self, width: Dp, height: Dp) -> Self {
        self.width(width).height(height)
    }

    /// Layers `other` on top of `self`. Every field set in `other` wins. A
    /// non-empty transform list in `other` replaces the one in `self`.
    pub fn merge(mut self, other: &Style) -> Style {
        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )*
            };
        }
        overlay!(
            width,
            height,
            max_width,
            flex,
            flex_direction,
            align_items,
            align_self,
            justify_content,
            gap,
            padding,
            margin,
            position,
            inset,
            background,
            border_width,
            border_color,
            border_radius,
            opacity,
            elevation,
            shadow,
            color,
            font_size,
            font_weight,
            text_transform,
            text_align,
        );
        if !other.transform.is_empty() {
            self.transform = other.transform.clone();
        }
        self.overflow_hidden |= other.overflow_hidden;
        self
    }

    /// Returns the first translate-x offset, if any.
    pub fn translate_x(&self) -> Option<f32> {
        self.transform.iter().find_map(|op| match op {
            TransformOp::TranslateX(v) => Some(*v),
            _ => None,
        })
    }

    /// Returns the first translate-y offset, if any.
    pub fn translate_y(&self) -> Option<f32> {
        self.transform.iter().find_map(|op| match op {
            TransformOp::TranslateY(v) => Some(*v),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overrides_only_set_fields() {
        let base = Style::new()
            .height(Dp(40.0))
            .background(Color::BLACK)
            .opacity(1.0);
        let layer = Style::new().background(Color::WHITE);
        let merged = base.merge(&layer);
        assert_eq!(merged.height, Some(DimensionValue::Fixed(Dp(40.0))));
        assert_eq!(merged.background, Some(Color::WHITE));
        assert_eq!(merged.opacity, Some(1.0));
    }

    #[test]
    fn merge_replaces_transform_list() {
        let base = Style::new()
            .transform(TransformOp::TranslateX(4.0))
            .transform(TransformOp::Scale(2.0));
        let layer = Style::new().transform(TransformOp::Rotate(90.0));
        let merged = base.merge(&layer);
        assert_eq!(merged.transform.as_slice(), &[TransformOp::Rotate(90.0)]);
        assert_eq!(merged.translate_x(), None);
    }
}
