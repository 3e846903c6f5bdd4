//! Logging setup using tracing.
//!
//! The TUI owns the terminal, so logs only ever go to a file. Without a
//! configured log file no subscriber is installed and events are dropped.
//!
//! ```bash
//! DSA_VIEWER_LOG=debug dsa-viewer --log-file viewer.log
//! ```

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Settings;

/// Environment variable that overrides `log_level`.
pub const LOG_ENV: &str = "DSA_VIEWER_LOG";

/// Install the global subscriber described by `settings`.
///
/// Returns `Ok(false)` when logging is disabled.
pub fn init(settings: &Settings) -> Result<bool> {
    let Some(ref path) = settings.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let env_filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log_level)
            .with_context(|| format!("Invalid log level `{}`", settings.log_level))?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %path.display(),
        "dsa-viewer starting"
    );

    Ok(true)
}
