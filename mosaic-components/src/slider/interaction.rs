use mosaic_ui::{
    CallbackWith, State,
    gesture::{GestureEvent, LayoutEvent},
};
use tracing::trace;

use super::SliderController;

pub(super) fn layout_handler(controller: State<SliderController>) -> CallbackWith<LayoutEvent> {
    CallbackWith::new(move |event: LayoutEvent| {
        controller.with_mut(|c| c.on_layout(event.width));
    })
}

pub(super) fn gesture_handler(
    controller: State<SliderController>,
    on_value_change: Option<CallbackWith<f32>>,
    disabled: bool,
) -> CallbackWith<GestureEvent> {
    CallbackWith::new(move |event: GestureEvent| {
        if disabled {
            trace!(event = event.name(), "disabled slider ignored gesture");
            return;
        }
        let emitted = controller.with_mut(|c| match event {
            GestureEvent::Start => {
                c.on_gesture_start();
                None
            }
            GestureEvent::Move { dx, .. } => c.on_gesture_move(dx),
            GestureEvent::End | GestureEvent::Cancel => c.on_gesture_end(),
        });
        notify_on_change(emitted, on_value_change.as_ref());
    })
}

fn notify_on_change(value: Option<f32>, on_value_change: Option<&CallbackWith<f32>>) {
    if let (Some(value), Some(callback)) = (value, on_value_change) {
        callback.call(value);
    }
}
