//! Log setup for the terminal runner.
//!
//! The terminal is in raw mode while the game runs, so logs only go to a file.
//! Without a log path no subscriber is installed and the core's `tracing`
//! events are discarded.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter (`info` when unset).
pub const LOG_FILTER_ENV: &str = "BALLSORT_LOG";

/// Build the filter from `BALLSORT_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global subscriber appending to `path`. Returns false if no path was given.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .with(env_filter())
        .try_init()
        .context("install tracing subscriber")?;

    Ok(true)
}
