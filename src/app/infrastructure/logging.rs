//! Logging setup.
//!
//! Events go to stderr through `tracing-subscriber`'s fmt layer. `RUST_LOG`
//! wins over the `log_level` from the settings file.

use tracing_subscriber::EnvFilter;

use crate::app::domain::settings::AppSettings;

/// Build the filter: `RUST_LOG` if set and valid, else the settings level,
/// else `warn`.
pub fn build_filter(settings: &AppSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| EnvFilter::try_new(&settings.log_level).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(settings: &AppSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
