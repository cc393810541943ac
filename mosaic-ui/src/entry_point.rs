//! Process-level setup shared by host binaries.

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to
/// `error,mosaic_ui=info`. Calling this more than once is harmless; later
/// calls leave the first subscriber in place.
pub fn init_tracing() {
    init_tracing_with_default("error,mosaic_ui=info");
}

/// Like [`init_tracing`] with a caller-chosen fallback filter.
pub fn init_tracing_with_default(default_filter: &str) {
    #[cfg(target_os = "android")]
    {
        let _ = default_filter;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_max_level(tracing::Level::INFO)
            .try_init();
    }

    #[cfg(not(target_os = "android"))]
    {
        let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match tracing_subscriber::EnvFilter::try_new(default_filter) {
                Ok(filter) => filter,
                Err(_) => tracing_subscriber::EnvFilter::new("error"),
            },
        };

        let _ = tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .try_init();
    }
}
