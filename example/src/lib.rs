//! A widget gallery driven through a scripted headless session.

mod app;
mod app_state;

use std::time::Duration;

use mosaic_ui::{DispatchError, LayoutEvent, ManualClock, Runtime, RuntimeConfig};
use tracing::info;

pub use crate::{app::app, app_state::AppState};

/// Builds the gallery and plays a short interaction script against it.
pub fn run() -> Result<(), DispatchError> {
    let state = AppState::new();
    let mut runtime = Runtime::headless(RuntimeConfig::default());
    let frame = |runtime: &mut Runtime<ManualClock>| {
        let nodes = runtime.frame(|| app(&state)).node_count();
        info!(nodes, "gallery frame");
    };

    frame(&mut runtime);
    runtime.layout("volume", LayoutEvent::sized(300.0, 40.0))?;
    frame(&mut runtime);
    runtime.drag("volume.thumb", [30.0, 90.0])?;
    info!(volume = state.volume.get(), "volume dragged");

    runtime.press("notifications")?;
    frame(&mut runtime);
    runtime.advance(Duration::from_millis(250));
    frame(&mut runtime);

    runtime.change_text("email.field", "someone")?;
    frame(&mut runtime);
    runtime.change_text("email.field", "someone@example.com")?;
    runtime.press("remember")?;
    runtime.press("radio.l")?;
    frame(&mut runtime);

    runtime.press("notify")?;
    frame(&mut runtime);
    runtime.advance(Duration::from_millis(4000));
    frame(&mut runtime);
    frame(&mut runtime);

    runtime.press("delete")?;
    frame(&mut runtime);
    runtime.press("confirm_delete.confirm")?;
    runtime.press("toggle_loading")?;
    frame(&mut runtime);

    state.log.with(|log| info!(events = log.len(), "script finished"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_runs_to_completion() {
        run().unwrap();
    }

    #[test]
    fn gallery_reflects_state() {
        let state = AppState::new();
        let mut runtime = Runtime::headless(RuntimeConfig::default());
        runtime.frame(|| app(&state));
        assert!(runtime.find("placeholders").is_some());
        runtime.press("toggle_loading").unwrap();
        runtime.frame(|| app(&state));
        assert!(runtime.find("loaded").is_some());
        assert!(runtime.find("toast").is_none());
    }
}
