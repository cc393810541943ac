use mosaic_ui::{
    CallbackWith, Color, DimensionValue, Dp, Style, ViewNode,
    gesture::{GestureEvent, LayoutEvent},
    style::{Justify, Position, Shadow, TransformOp},
};

use crate::theme::ThemeColors;

use super::{CONTAINER_HEIGHT, SliderArgs, SliderController, TRACK_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SliderColors {
    pub(super) track: Color,
    pub(super) fill: Color,
    pub(super) thumb: Color,
}

impl SliderColors {
    pub(super) fn resolve(args: &SliderArgs, colors: &ThemeColors) -> Self {
        if args.disabled {
            return Self {
                track: colors.disabled,
                fill: colors.disabled,
                thumb: colors.disabled,
            };
        }
        Self {
            track: colors.border,
            fill: args.track_color.unwrap_or(colors.primary),
            thumb: args.thumb_color.unwrap_or(colors.primary),
        }
    }
}

pub(super) fn render_slider(
    args: &SliderArgs,
    state: &SliderController,
    colors: &SliderColors,
    on_layout: CallbackWith<LayoutEvent>,
    on_gesture: CallbackWith<GestureEvent>,
) -> ViewNode {
    let position = Dp::from_pixels_f32(state.track_position());
    let container_style = Style::new()
        .height(CONTAINER_HEIGHT)
        .justify_content(Justify::Center)
        .merge(&args.style);

    ViewNode::view()
        .key(args.key.clone())
        .style(container_style)
        .on_layout(on_layout)
        .child(render_track(args, position, colors))
        .child(render_thumb(args, position, colors, on_gesture))
}

fn render_track(args: &SliderArgs, position: Dp, colors: &SliderColors) -> ViewNode {
    let fill = ViewNode::view().key(format!("{}.fill", args.key)).style(
        Style::new()
            .position(Position::Absolute)
            .width(position)
            .height(TRACK_HEIGHT)
            .background(colors.fill),
    );
    ViewNode::view()
        .key(format!("{}.track", args.key))
        .style(
            Style::new()
                .width(DimensionValue::FULL)
                .height(TRACK_HEIGHT)
                .border_radius(TRACK_HEIGHT / 2.0)
                .overflow_hidden(true)
                .background(colors.track),
        )
        .child(fill)
}

fn render_thumb(
    args: &SliderArgs,
    position: Dp,
    colors: &SliderColors,
    on_gesture: CallbackWith<GestureEvent>,
) -> ViewNode {
    let size = args.thumb_size;
    let offset = (position - size / 2.0).0 as f32;
    ViewNode::view()
        .key(format!("{}.thumb", args.key))
        .disabled(args.disabled)
        .style(
            Style::new()
                .position(Position::Absolute)
                .size(size, size)
                .border_radius(size / 2.0)
                .background(colors.thumb)
                .elevation(Dp(2.0))
                .shadow(Shadow::drop(0.25, Dp(4.0)))
                .transform(TransformOp::TranslateX(offset)),
        )
        .on_gesture(on_gesture)
}
