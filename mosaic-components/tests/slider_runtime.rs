use mosaic_components::slider::{SliderArgs, SliderConfig, SliderController, slider};
use mosaic_ui::{
    ManualClock, Runtime, RuntimeConfig, State,
    gesture::{GestureEvent, LayoutEvent},
    runtime::DispatchError,
    testing::CallRecorder,
};

fn continuous() -> SliderConfig {
    SliderConfig::continuous(0.0, 100.0).unwrap()
}

struct Harness {
    runtime: Runtime<ManualClock>,
    controller: State<SliderController>,
    values: CallRecorder<f32>,
    external: State<f32>,
    disabled: bool,
}

impl Harness {
    fn new(config: SliderConfig, initial: f32) -> Self {
        let mut harness = Self {
            runtime: Runtime::headless(RuntimeConfig::default()),
            controller: State::new(SliderController::new(config, initial)),
            values: CallRecorder::new(),
            external: State::new(initial),
            disabled: false,
        };
        harness.frame(config);
        harness
            .runtime
            .layout("slider", LayoutEvent::sized(200.0, 40.0))
            .unwrap();
        harness.frame(config);
        harness
    }

    fn frame(&mut self, config: SliderConfig) {
        let args = SliderArgs::default()
            .value(self.external.get())
            .config(config)
            .disabled(self.disabled)
            .controller(self.controller.clone())
            .on_value_change_shared(self.values.callback());
        self.runtime.frame(|| slider(&args));
    }
}

#[test]
fn drag_reports_values_and_settles_on_release() {
    let mut h = Harness::new(continuous(), 0.0);

    h.runtime.gesture("slider.thumb", GestureEvent::Start).unwrap();
    h.runtime
        .gesture("slider.thumb", GestureEvent::horizontal(50.0))
        .unwrap();
    assert_eq!(h.values.last(), Some(25.0));
    h.runtime
        .gesture("slider.thumb", GestureEvent::horizontal(100.0))
        .unwrap();
    assert_eq!(h.values.last(), Some(50.0));
    h.runtime.gesture("slider.thumb", GestureEvent::End).unwrap();

    assert_eq!(h.values.calls(), vec![25.0, 50.0, 50.0]);
    h.controller.with(|c| {
        assert_eq!(c.track_position(), 100.0);
        assert!(!c.is_dragging());
    });

    // The caller never fed 50 back; the thumb keeps the released value.
    h.frame(continuous());
    assert_eq!(h.controller.with(SliderController::track_position), 100.0);
}

#[test]
fn stepped_drag_snaps_every_report() {
    let config = SliderConfig::new(0.0, 100.0, 10.0).unwrap();
    let mut h = Harness::new(config, 0.0);
    h.runtime.drag("slider.thumb", [13.0, 47.0, 61.0]).unwrap();
    assert_eq!(h.values.calls(), vec![10.0, 20.0, 30.0, 30.0]);
    assert_eq!(h.controller.with(SliderController::track_position), 60.0);

    // The caller never fed 30 back; rebuilding keeps the released thumb.
    h.frame(config);
    assert_eq!(h.controller.with(SliderController::track_position), 60.0);
    assert_eq!(h.controller.with(SliderController::committed_value), 30.0);
}

#[test]
fn external_value_during_drag_applies_after_release() {
    let mut h = Harness::new(continuous(), 0.0);
    h.runtime.gesture("slider.thumb", GestureEvent::Start).unwrap();
    h.runtime
        .gesture("slider.thumb", GestureEvent::horizontal(40.0))
        .unwrap();

    h.external.set(80.0);
    h.frame(continuous());
    h.controller.with(|c| {
        assert!(c.is_dragging());
        assert_eq!(c.track_position(), 40.0);
    });

    h.runtime.gesture("slider.thumb", GestureEvent::End).unwrap();
    assert_eq!(h.controller.with(SliderController::committed_value), 20.0);

    h.frame(continuous());
    h.controller.with(|c| {
        assert_eq!(c.committed_value(), 80.0);
        assert_eq!(c.track_position(), 160.0);
    });
}

#[test]
fn drag_clamps_to_track_ends() {
    let mut h = Harness::new(continuous(), 50.0);
    assert_eq!(h.controller.with(SliderController::track_position), 100.0);
    h.runtime.drag("slider.thumb", [500.0]).unwrap();
    assert_eq!(h.values.calls(), vec![100.0, 100.0]);
    h.runtime.drag("slider.thumb", [-500.0]).unwrap();
    assert_eq!(h.values.last(), Some(0.0));
    assert_eq!(h.controller.with(SliderController::track_position), 0.0);
}

#[test]
fn disabled_slider_refuses_gestures() {
    let mut h = Harness::new(continuous(), 0.0);
    h.disabled = true;
    h.frame(continuous());
    assert_eq!(
        h.runtime.drag("slider.thumb", [50.0]),
        Err(DispatchError::Disabled("slider.thumb".to_string()))
    );
    assert_eq!(h.values.count(), 0);
}

#[test]
fn remeasured_track_moves_thumb() {
    let mut h = Harness::new(continuous(), 25.0);
    assert_eq!(h.controller.with(SliderController::track_position), 50.0);
    h.runtime
        .layout("slider", LayoutEvent::sized(400.0, 40.0))
        .unwrap();
    assert_eq!(h.controller.with(SliderController::track_position), 100.0);

    h.frame(continuous());
    h.controller.with(|c| {
        assert_eq!(c.track_length(), 400.0);
        assert_eq!(c.track_position(), 100.0);
    });
}
