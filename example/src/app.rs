use mosaic_components::{
    app_bar::{AppBarArgs, app_bar},
    button::{ButtonArgs, ButtonVariant, button},
    card::{CardArgs, card},
    checkbox::{CheckboxArgs, checkbox},
    dialog::{DialogArgs, dialog},
    divider::{DividerArgs, divider},
    floating_action_button::{FabArgs, floating_action_button},
    loading::{WaveLoaderArgs, wave_loader},
    radio_button::{RadioButtonArgs, RadioGroupArgs, radio_group},
    skeleton::{SkeletonArgs, SkeletonVariant, skeleton},
    slider::{SliderArgs, SliderConfig, slider},
    snackbar::{SnackbarAction, SnackbarArgs, snackbar},
    switch::{SwitchArgs, switch},
    text_area::{TextAreaArgs, text_area},
    text_input::{TextInputArgs, text_input},
    theme::{ThemeOverrides, theme_provider},
    tooltip::{TooltipArgs, TooltipPosition, tooltip},
};
use mosaic_ui::{
    Color, Dp, Style, ViewNode,
    style::{Edges, FlexDirection},
};

use crate::app_state::AppState;

/// Accent used across the gallery.
pub const ACCENT: Color = Color::from_rgb8(0x5E, 0x35, 0xB1);

fn row(children: impl IntoIterator<Item = ViewNode>) -> ViewNode {
    ViewNode::view()
        .style(Style::new().flex_direction(FlexDirection::Row))
        .children(children)
}

fn settings_card(state: &AppState) -> ViewNode {
    let volume = state.volume.clone();
    let brightness = state.brightness.clone();
    let notifications = state.notifications.clone();
    let percent = SliderConfig::new(0.0, 100.0, 5.0).unwrap_or_default();
    let unit = SliderConfig::continuous(0.0, 1.0).unwrap_or_default();

    card(
        &CardArgs::default()
            .key("settings")
            .title("Settings")
            .subtitle("Drag a slider or flip the switch"),
        [
            ViewNode::text(format!("Volume {}", state.volume.get())),
            slider(
                &SliderArgs::default()
                    .key("volume")
                    .value(state.volume.get())
                    .config(percent)
                    .on_value_change(move |v| volume.set(v)),
            ),
            slider(
                &SliderArgs::default()
                    .key("brightness")
                    .value(state.brightness.get())
                    .config(unit)
                    .track_color(ACCENT)
                    .on_value_change(move |v| brightness.set(v)),
            ),
            row([
                ViewNode::text("Notifications"),
                switch(
                    &SwitchArgs::default()
                        .key("notifications")
                        .value(state.notifications.get())
                        .on_value_change(move |v| notifications.set(v)),
                ),
            ]),
        ],
    )
}

fn form_card(state: &AppState) -> ViewNode {
    let email = state.email.clone();
    let notes = state.notes.clone();
    let remember_me = state.remember_me.clone();
    let size = state.size.clone();
    let email_error = {
        let value = state.email.get();
        (!value.is_empty() && !value.contains('@')).then(|| "Enter a valid email".to_string())
    };
    let mut email_args = TextInputArgs::default()
        .key("email")
        .label("Email")
        .placeholder("you@example.com")
        .value(state.email.get())
        .on_change_text(move |text| email.set(text));
    email_args.error = email_error;

    card(
        &CardArgs::default().key("form").title("Profile"),
        [
            text_input(&email_args),
            text_area(
                &TextAreaArgs::default()
                    .key("notes")
                    .label("Notes")
                    .max_length(80usize)
                    .value(state.notes.get())
                    .on_change_text(move |text| notes.set(text)),
            ),
            checkbox(
                &CheckboxArgs::default()
                    .key("remember")
                    .label("Remember me")
                    .checked(state.remember_me.get())
                    .on_press(move |checked| remember_me.set(checked)),
            ),
            radio_group(
                &RadioGroupArgs::default()
                    .key("size")
                    .selected_value(state.size.get())
                    .on_value_change(move |value| size.set(value)),
                [
                    RadioButtonArgs::option("s", "Small"),
                    RadioButtonArgs::option("m", "Medium"),
                    RadioButtonArgs::option("l", "Large"),
                ],
            ),
        ],
    )
}

fn actions(state: &AppState) -> ViewNode {
    let open_dialog = state.dialog_open.clone();
    let show_snackbar = state.snackbar_visible.clone();
    let loading = state.loading.clone();
    row([
        button(&ButtonArgs::filled("Delete", move || open_dialog.set(true)).key("delete")),
        button(
            &ButtonArgs::default()
                .key("notify")
                .label("Notify")
                .variant(ButtonVariant::Outlined)
                .on_press(move || show_snackbar.set(true)),
        ),
        button(
            &ButtonArgs::default()
                .key("toggle_loading")
                .label("Loading")
                .variant(ButtonVariant::Text)
                .on_press(move || loading.with_mut(|l| *l = !*l)),
        ),
        tooltip(
            &TooltipArgs::default()
                .key("help")
                .content("Deleting clears the draft")
                .position(TooltipPosition::Bottom),
            ViewNode::text("?"),
        ),
    ])
}

fn placeholders(state: &AppState) -> ViewNode {
    if !state.loading.get() {
        return ViewNode::text("Loaded").key("loaded");
    }
    ViewNode::view()
        .key("placeholders")
        .style(Style::new().padding(Edges::all(Dp(12.0))))
        .child(row([
            skeleton(
                &SkeletonArgs::default()
                    .key("avatar")
                    .variant(SkeletonVariant::Circle)
                    .width(Dp(40.0)),
            ),
            skeleton(
                &SkeletonArgs::default()
                    .key("headline")
                    .variant(SkeletonVariant::Text)
                    .width(Dp(160.0)),
            ),
        ]))
        .child(wave_loader(&WaveLoaderArgs::default().key("wave").color(ACCENT)))
}

fn overlays(state: &AppState) -> ViewNode {
    let confirm = state.clone();
    let cancel = state.dialog_open.clone();
    let dismiss = state.snackbar_visible.clone();
    let undo = state.clone();
    let snackbar_args = SnackbarArgs::default()
        .key("toast")
        .visible(state.snackbar_visible.get())
        .message("Notifications sent")
        .action(SnackbarAction::new("Undo", move || undo.record("undo")))
        .on_dismiss(move || dismiss.set(false));

    ViewNode::view()
        .child(dialog(
            &DialogArgs::default()
                .key("confirm_delete")
                .visible(state.dialog_open.get())
                .title("Delete draft?")
                .on_confirm(move || {
                    confirm.dialog_open.set(false);
                    confirm.notes.set(String::new());
                    confirm.record("draft deleted");
                })
                .on_cancel(move || cancel.set(false)),
            [ViewNode::text("This cannot be undone.")],
        ))
        .child_opt(snackbar(&snackbar_args))
}

/// Builds the gallery screen.
pub fn app(state: &AppState) -> ViewNode {
    theme_provider(ThemeOverrides::default().primary(ACCENT), || {
        let add = state.clone();
        ViewNode::view()
            .key("screen")
            .style(Style::new().flex(1.0))
            .child(app_bar(&AppBarArgs::default().title("Mosaic gallery")))
            .child(settings_card(state))
            .child(divider(&DividerArgs::default()))
            .child(form_card(state))
            .child(actions(state))
            .child(placeholders(state))
            .child(floating_action_button(
                &FabArgs::default()
                    .icon(ViewNode::text("+"))
                    .on_press(move || add.record("fab pressed")),
            ))
            .child(overlays(state))
    })
}
