//! A tap-to-show bubble anchored to a trigger.
//!
//! ## Usage
//!
//! Wrap a small control to explain it. Pressing the trigger shows the
//! bubble in a transparent modal; pressing anywhere hides it again.
//!
//! The trigger and bubble report their window-space layout through
//! `on_layout`; [`tooltip_placement`] turns those measurements into absolute
//! offsets for the bubble.

use derive_setters::Setters;
use mosaic_ui::{
    Color, Dp, LayoutEvent, ScreenMetrics, State, Style, ViewNode,
    remember_with_key, try_use_context,
    style::{Align, Edges, Inset, Position, Shadow},
    view::{ModalAnimation, ModalSpec},
};
use tracing::trace;

/// Defaults for [`tooltip`].
pub struct TooltipDefaults;

impl TooltipDefaults {
    /// Gap between trigger and bubble.
    pub const OFFSET: Dp = Dp(8.0);
    /// Minimum distance between the bubble and the screen edges.
    pub const SCREEN_MARGIN: Dp = Dp(8.0);
    /// Bubble fill, `#333333`.
    pub const BACKGROUND: Color = Color::from_rgb8(0x33, 0x33, 0x33);
    /// Text color.
    pub const TEXT: Color = Color::WHITE;
    /// Maximum bubble width as a fraction of the screen width.
    pub const MAX_WIDTH_FRACTION: f64 = 0.8;
}

/// Side of the trigger the bubble appears on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TooltipPosition {
    /// Above, horizontally centered.
    #[default]
    Top,
    /// Below, horizontally centered.
    Bottom,
    /// To the left, vertically centered.
    Left,
    /// To the right, vertically centered.
    Right,
}

/// A rectangle in window coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub x: Dp,
    /// Top edge.
    pub y: Dp,
    /// Width.
    pub width: Dp,
    /// Height.
    pub height: Dp,
}

impl From<LayoutEvent> for Bounds {
    fn from(event: LayoutEvent) -> Self {
        Self {
            x: Dp::from_pixels_f32(event.x),
            y: Dp::from_pixels_f32(event.y),
            width: Dp::from_pixels_f32(event.width),
            height: Dp::from_pixels_f32(event.height),
        }
    }
}

/// Absolute offsets of a `bubble`-sized tooltip around `trigger`.
///
/// Top and bottom bubbles are centered on the trigger and clamped to stay
/// [`TooltipDefaults::SCREEN_MARGIN`] away from both screen edges; when the
/// screen is too narrow the left margin wins. Left bubbles are anchored by
/// their right edge.
pub fn tooltip_placement(
    position: TooltipPosition,
    trigger: Bounds,
    bubble_width: Dp,
    bubble_height: Dp,
    screen_width: Dp,
    offset: Dp,
) -> Inset {
    let margin = TooltipDefaults::SCREEN_MARGIN;
    let centered_left = (trigger.x + (trigger.width - bubble_width) / 2.0)
        .min(screen_width - bubble_width - margin)
        .max(margin);
    let centered_top = trigger.y + (trigger.height - bubble_height) / 2.0;
    match position {
        TooltipPosition::Top => Inset {
            left: Some(centered_left),
            top: Some(trigger.y - bubble_height - offset),
            ..Inset::default()
        },
        TooltipPosition::Bottom => Inset {
            left: Some(centered_left),
            top: Some(trigger.y + trigger.height + offset),
            ..Inset::default()
        },
        TooltipPosition::Left => Inset {
            right: Some(screen_width - trigger.x + offset),
            top: Some(centered_top),
            ..Inset::default()
        },
        TooltipPosition::Right => Inset {
            left: Some(trigger.x + trigger.width + offset),
            top: Some(centered_top),
            ..Inset::default()
        },
    }
}

/// Visibility and measurements of a tooltip.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TooltipController {
    visible: bool,
    trigger: Bounds,
    bubble_width: Dp,
    bubble_height: Dp,
}

impl TooltipController {
    /// Creates a hidden controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the bubble is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last measured trigger bounds.
    pub fn trigger(&self) -> Bounds {
        self.trigger
    }

    /// Shows the bubble.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the bubble.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Records the trigger's window bounds.
    pub fn measure_trigger(&mut self, bounds: Bounds) {
        self.trigger = bounds;
    }

    /// Records the bubble's size.
    pub fn measure_bubble(&mut self, width: Dp, height: Dp) {
        self.bubble_width = width;
        self.bubble_height = height;
    }
}

/// Arguments for [`tooltip`].
#[derive(Clone, PartialEq, Setters)]
pub struct TooltipArgs {
    /// Key of the trigger; the modal is `{key}.modal`, the overlay
    /// `{key}.overlay` and the bubble `{key}.bubble`.
    #[setters(into)]
    pub key: String,
    /// Bubble text.
    #[setters(into)]
    pub content: String,
    /// Side of the trigger.
    pub position: TooltipPosition,
    /// Bubble fill.
    pub background: Color,
    /// Text color.
    pub text_color: Color,
    /// Gap between trigger and bubble.
    pub offset: Dp,
    /// Extra container style.
    pub container_style: Style,
    /// Extra text style.
    pub content_style: Style,
    /// Optional external controller.
    #[setters(skip)]
    pub controller: Option<State<TooltipController>>,
}

impl Default for TooltipArgs {
    fn default() -> Self {
        Self {
            key: "tooltip".to_string(),
            content: String::new(),
            position: TooltipPosition::default(),
            background: TooltipDefaults::BACKGROUND,
            text_color: TooltipDefaults::TEXT,
            offset: TooltipDefaults::OFFSET,
            container_style: Style::default(),
            content_style: Style::default(),
            controller: None,
        }
    }
}

impl TooltipArgs {
    /// Uses an external controller.
    pub fn controller(mut self, controller: State<TooltipController>) -> Self {
        self.controller = Some(controller);
        self
    }
}

/// Renders `trigger` with a tooltip attached.
pub fn tooltip(args: &TooltipArgs, trigger: ViewNode) -> ViewNode {
    let controller = args
        .controller
        .clone()
        .unwrap_or_else(|| remember_with_key(&args.key, TooltipController::new));
    let snapshot = controller.get();
    let screen_width = try_use_context::<ScreenMetrics>()
        .map(|metrics| metrics.width)
        .unwrap_or_else(|| ScreenMetrics::default().width);

    let inset = tooltip_placement(
        args.position,
        snapshot.trigger,
        snapshot.bubble_width,
        snapshot.bubble_height,
        screen_width,
        args.offset,
    );
    let on_bubble_layout = {
        let controller = controller.clone();
        move |event: LayoutEvent| {
            let bounds = Bounds::from(event);
            controller.with_mut(|c| c.measure_bubble(bounds.width, bounds.height));
        }
    };
    let bubble = ViewNode::view()
        .key(format!("{}.bubble", args.key))
        .style(
            Style::new()
                .position(Position::Absolute)
                .inset(inset)
                .background(args.background)
                .padding(Edges::all(Dp(8.0)))
                .border_radius(Dp(4.0))
                .max_width(screen_width * TooltipDefaults::MAX_WIDTH_FRACTION)
                .elevation(Dp(5.0))
                .shadow(Shadow::drop(0.25, Dp(3.84))),
        )
        .on_layout(on_bubble_layout)
        .child(
            ViewNode::text(args.content.clone()).style(
                Style::new()
                    .font_size(Dp(14.0))
                    .color(args.text_color)
                    .merge(&args.content_style),
            ),
        );

    let hide = {
        let controller = controller.clone();
        move || controller.with_mut(TooltipController::hide)
    };
    let overlay = ViewNode::pressable()
        .key(format!("{}.overlay", args.key))
        .style(Style::new().flex(1.0).background(Color::TRANSPARENT))
        .on_press(hide.clone())
        .child(bubble);
    let modal = ViewNode::modal(ModalSpec {
        visible: snapshot.visible,
        transparent: true,
        animation: ModalAnimation::Fade,
    })
    .key(format!("{}.modal", args.key))
    .on_request_close(hide)
    .child(overlay);

    let on_trigger_layout = {
        let controller = controller.clone();
        move |event: LayoutEvent| controller.with_mut(|c| c.measure_trigger(event.into()))
    };
    let show = move || {
        controller.with_mut(TooltipController::show);
        trace!("tooltip shown");
    };
    let trigger = ViewNode::pressable()
        .key(args.key.clone())
        .on_press(show)
        .on_layout(on_trigger_layout)
        .child(trigger);

    ViewNode::view()
        .style(
            Style::new()
                .align_self(Align::Start)
                .merge(&args.container_style),
        )
        .child(trigger)
        .child(modal)
}

#[cfg(test)]
mod tests {
    use mosaic_ui::ViewKind;

    use super::*;

    fn trigger() -> Bounds {
        Bounds {
            x: Dp(100.0),
            y: Dp(300.0),
            width: Dp(40.0),
            height: Dp(20.0),
        }
    }

    #[test]
    fn top_is_centered_above() {
        let inset = tooltip_placement(
            TooltipPosition::Top,
            trigger(),
            Dp(80.0),
            Dp(30.0),
            Dp(390.0),
            Dp(8.0),
        );
        assert_eq!(inset.left, Some(Dp(80.0)));
        assert_eq!(inset.top, Some(Dp(262.0)));
    }

    #[test]
    fn horizontal_position_is_clamped() {
        let near_left = Bounds {
            x: Dp(0.0),
            ..trigger()
        };
        let inset = tooltip_placement(
            TooltipPosition::Bottom,
            near_left,
            Dp(100.0),
            Dp(30.0),
            Dp(390.0),
            Dp(8.0),
        );
        assert_eq!(inset.left, Some(Dp(8.0)));
        assert_eq!(inset.top, Some(Dp(328.0)));

        let near_right = Bounds {
            x: Dp(380.0),
            ..trigger()
        };
        let inset = tooltip_placement(
            TooltipPosition::Top,
            near_right,
            Dp(100.0),
            Dp(30.0),
            Dp(390.0),
            Dp(8.0),
        );
        assert_eq!(inset.left, Some(Dp(282.0)));
    }

    #[test]
    fn side_placements_center_vertically() {
        let left = tooltip_placement(
            TooltipPosition::Left,
            trigger(),
            Dp(80.0),
            Dp(30.0),
            Dp(390.0),
            Dp(8.0),
        );
        assert_eq!(left.right, Some(Dp(298.0)));
        assert_eq!(left.top, Some(Dp(295.0)));
        let right = tooltip_placement(
            TooltipPosition::Right,
            trigger(),
            Dp(80.0),
            Dp(30.0),
            Dp(390.0),
            Dp(8.0),
        );
        assert_eq!(right.left, Some(Dp(148.0)));
    }

    #[test]
    fn press_shows_and_overlay_hides() {
        let controller = State::new(TooltipController::new());
        let args = TooltipArgs::default()
            .content("Help")
            .controller(controller.clone());
        let node = tooltip(&args, ViewNode::text("?"));
        node.find("tooltip").unwrap().handlers.on_press.as_ref().unwrap().call();
        assert!(controller.with(TooltipController::is_visible));

        let node = tooltip(&args, ViewNode::text("?"));
        let ViewKind::Modal(spec) = &node.find("tooltip.modal").unwrap().kind else {
            panic!("modal expected");
        };
        assert!(spec.visible);
        node.find("tooltip.overlay").unwrap().handlers.on_press.as_ref().unwrap().call();
        assert!(!controller.with(TooltipController::is_visible));
    }
}
