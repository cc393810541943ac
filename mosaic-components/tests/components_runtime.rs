use std::time::Duration;

use mosaic_components::{
    button::{ButtonArgs, button},
    checkbox::{CheckboxArgs, checkbox},
    dialog::{DialogArgs, dialog},
    radio_button::{RadioButtonArgs, RadioGroupArgs, radio_group},
    snackbar::{SnackbarArgs, SnackbarController, snackbar},
    switch::{SwitchArgs, SwitchController, switch},
    text_area::{TextAreaArgs, text_area},
    text_input::{TextInputArgs, TextInputController, text_input},
    tooltip::{TooltipArgs, TooltipController, tooltip},
};
use mosaic_ui::{
    DispatchError, Dp, LayoutEvent, ManualClock, Runtime, RuntimeConfig, State, ViewKind, ViewNode,
    testing::CallRecorder,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn switch_slides_after_the_caller_accepts_a_press() {
    let mut runtime = Runtime::headless(RuntimeConfig::default());
    let value = State::new(false);
    let controller = State::new(SwitchController::new());
    let frame = |runtime: &mut Runtime<ManualClock>| {
        let sink = value.clone();
        let args = SwitchArgs::default()
            .value(value.get())
            .controller(controller.clone())
            .on_value_change(move |v| sink.set(v));
        runtime.frame(|| switch(&args));
    };

    frame(&mut runtime);
    assert_eq!(controller.with(SwitchController::thumb_offset), 2.0);

    runtime.press("switch").unwrap();
    assert!(value.get());
    frame(&mut runtime);
    assert!(controller.with(SwitchController::is_animating));

    runtime.advance(ms(100));
    frame(&mut runtime);
    let halfway = controller.with(SwitchController::thumb_offset);
    assert!(halfway > 2.0 && halfway < 22.0, "thumb at {halfway}");

    runtime.advance(ms(100));
    frame(&mut runtime);
    controller.with(|c| {
        assert_eq!(c.thumb_offset(), 22.0);
        assert_eq!(c.settled_value(), Some(true));
        assert!(!c.is_animating());
    });
}

#[test]
fn disabled_switch_rejects_press() {
    let mut runtime = Runtime::headless(RuntimeConfig::default());
    let changes = CallRecorder::<bool>::new();
    let callback = changes.callback();
    runtime.frame(|| {
        let callback = callback.clone();
        switch(
            &SwitchArgs::default()
                .disabled(true)
                .on_value_change(move |v| callback.call(v)),
        )
    });
    assert_eq!(
        runtime.press("switch"),
        Err(DispatchError::Disabled("switch".to_string()))
    );
    assert_eq!(changes.count(), 0);
}

#[test]
fn snackbar_dismisses_itself_after_its_duration() {
    let mut runtime = Runtime::headless(RuntimeConfig::default());
    let visible = State::new(true);
    let dismissals = CallRecorder::<()>::new();
    let controller = State::new(SnackbarController::new());
    let frame = |runtime: &mut Runtime<ManualClock>| {
        let sink = visible.clone();
        let recorder = dismissals.unit_callback();
        let args = SnackbarArgs::default()
            .visible(visible.get())
            .message("Saved")
            .duration(ms(1000))
            .controller(controller.clone())
            .on_dismiss(move || {
                recorder.call();
                sink.set(false);
            });
        runtime.frame(|| ViewNode::view().child_opt(snackbar(&args)));
    };

    frame(&mut runtime);
    assert!(runtime.find("snackbar").is_some());
    assert_eq!(controller.with(SnackbarController::dismiss_deadline), Some(ms(1000)));

    runtime.advance(ms(200));
    frame(&mut runtime);
    assert_eq!(controller.with(SnackbarController::opacity), 1.0);
    assert_eq!(controller.with(SnackbarController::translate_y), 0.0);

    runtime.advance(ms(799));
    frame(&mut runtime);
    assert_eq!(dismissals.count(), 0);

    runtime.advance(ms(1));
    frame(&mut runtime);
    assert_eq!(dismissals.count(), 1);
    assert!(!visible.get());

    frame(&mut runtime);
    assert!(runtime.find("snackbar").is_none());
    runtime.advance(ms(5000));
    frame(&mut runtime);
    assert_eq!(dismissals.count(), 1);
}

#[test]
fn dialog_routes_actions_and_back_button() {
    let mut runtime = Runtime::headless(RuntimeConfig::default());
    let confirms = CallRecorder::<()>::new();
    let cancels = CallRecorder::<()>::new();
    let args = DialogArgs::default()
        .visible(true)
        .title("Discard draft?")
        .on_confirm(confirms.unit_callback())
        .on_cancel(cancels.unit_callback());
    runtime.frame(|| dialog(&args, [ViewNode::text("Changes will be lost.")]));

    runtime.press("dialog.confirm").unwrap();
    runtime.press("dialog.cancel").unwrap();
    runtime.request_close("dialog").unwrap();
    assert_eq!(confirms.count(), 1);
    assert_eq!(cancels.count(), 2);
    assert_eq!(
        runtime.press("dialog.panel"),
        Err(DispatchError::NoHandler {
            key: "dialog.panel".to_string(),
            event: "press",
        })
    );
}

#[test]
fn tooltip_positions_bubble_from_measurements() {
    let mut runtime = Runtime::headless(RuntimeConfig::default());
    let controller = State::new(TooltipController::new());
    let args = TooltipArgs::default()
        .content("Refresh the feed")
        .controller(controller.clone());
    let build = || tooltip(&args, ViewNode::text("?"));

    runtime.frame(build);
    runtime
        .layout(
            "tooltip",
            LayoutEvent {
                x: 100.0,
                y: 300.0,
                width: 40.0,
                height: 20.0,
            },
        )
        .unwrap();
    runtime.press("tooltip").unwrap();
    runtime.frame(build);
    runtime
        .layout("tooltip.bubble", LayoutEvent::sized(80.0, 30.0))
        .unwrap();
    runtime.frame(build);

    let ViewKind::Modal(spec) = &runtime.find("tooltip.modal").unwrap().kind else {
        panic!("modal expected");
    };
    assert!(spec.visible);
    let inset = runtime
        .find("tooltip.bubble")
        .unwrap()
        .style
        .inset
        .unwrap();
    assert_eq!(inset.left, Some(Dp(80.0)));
    assert_eq!(inset.top, Some(Dp(262.0)));

    runtime.request_close("tooltip.modal").unwrap();
    assert!(!controller.with(TooltipController::is_visible));
}

#[test]
fn text_fields_report_edits_and_focus() {
    let mut runtime = Runtime::headless(RuntimeConfig::default());
    let edits = CallRecorder::<String>::new();
    let focus = State::new(TextInputController::new());
    let input_edits = edits.callback();
    let area_edits = edits.callback();
    runtime.frame(|| {
        ViewNode::view()
            .child(text_input(
                &TextInputArgs::default()
                    .placeholder("Email")
                    .controller(focus.clone())
                    .on_change_text(move |text| input_edits.call(text)),
            ))
            .child(text_area(
                &TextAreaArgs::default()
                    .max_length(5usize)
                    .on_change_text(move |text| area_edits.call(text)),
            ))
    });

    runtime.focus("text_input.field", true).unwrap();
    assert!(focus.with(TextInputController::is_focused));
    runtime.change_text("text_input.field", "a@b.c").unwrap();
    runtime.change_text("text_area.field", "héllo world").unwrap();
    assert_eq!(
        edits.calls(),
        vec!["a@b.c".to_string(), "héllo".to_string()]
    );
    runtime.focus("text_input.field", false).unwrap();
    assert!(!focus.with(TextInputController::is_focused));
}

#[test]
fn selection_controls_report_next_value() {
    let mut runtime = Runtime::headless(RuntimeConfig::default());
    let toggles = CallRecorder::<bool>::new();
    let picks = CallRecorder::<String>::new();
    let presses = CallRecorder::<()>::new();
    let toggle = toggles.callback();
    let pick = picks.callback();
    runtime.frame(|| {
        ViewNode::view()
            .child(checkbox(
                &CheckboxArgs::default()
                    .checked(true)
                    .label("Remember me")
                    .on_press(move |next| toggle.call(next)),
            ))
            .child(radio_group(
                &RadioGroupArgs::default()
                    .selected_value("s")
                    .on_value_change(move |value| pick.call(value)),
                [
                    RadioButtonArgs::option("s", "Small"),
                    RadioButtonArgs::option("l", "Large"),
                ],
            ))
            .child(button(&ButtonArgs::filled("Go", presses.unit_callback())))
    });

    runtime.press("checkbox").unwrap();
    runtime.press("radio.l").unwrap();
    runtime.press("button").unwrap();
    assert_eq!(toggles.calls(), vec![false]);
    assert_eq!(picks.calls(), vec!["l".to_string()]);
    assert_eq!(presses.count(), 1);
    assert!(matches!(
        runtime.press("missing"),
        Err(DispatchError::UnknownKey(_))
    ));
}
