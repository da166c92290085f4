//! Log setup.
//!
//! The terminal is busy showing the grid, so logs only go to a file, and
//! only when `TERMSTAGE_LOG_PATH` is set. `RUST_LOG` picks the filter
//! (default `info`).

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the file logger if `TERMSTAGE_LOG_PATH` names a file.
///
/// Returns whether a logger was installed.
pub fn init_from_env() -> Result<bool> {
    let Some(path) = std::env::var("TERMSTAGE_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
    Ok(true)
}
