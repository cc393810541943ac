use mosaic_ui::State;

/// Everything the gallery lets the user change.
#[derive(Clone)]
pub struct AppState {
    pub volume: State<f32>,
    pub brightness: State<f32>,
    pub notifications: State<bool>,
    pub remember_me: State<bool>,
    pub size: State<String>,
    pub email: State<String>,
    pub notes: State<String>,
    pub dialog_open: State<bool>,
    pub snackbar_visible: State<bool>,
    pub loading: State<bool>,
    pub log: State<Vec<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            volume: State::new(40.0),
            brightness: State::new(0.5),
            notifications: State::new(true),
            remember_me: State::new(false),
            size: State::new("m".to_string()),
            email: State::new(String::new()),
            notes: State::new(String::new()),
            dialog_open: State::new(false),
            snackbar_visible: State::new(false),
            loading: State::new(true),
            log: State::new(Vec::new()),
        }
    }

    pub fn record(&self, entry: impl Into<String>) {
        let entry = entry.into();
        tracing::info!(entry = entry.as_str(), "gallery event");
        self.log.with_mut(|log| log.push(entry));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
