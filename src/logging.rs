//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! The library logs through `tracing` macros only; the binary decides where
//! the output goes.
//!
//! # Log Levels
//!
//! - `warn`: default, silent during normal play
//! - `info`: round results
//! - `debug`: game settings, every scored guess and every rejection
//! - `trace`: everything else
//!
//! The TUI owns the terminal, so pass a log file when raising verbosity in
//! `play` mode.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Map a `-v` count to a log level
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `RUST_LOG` when set, otherwise the given level
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
    })
}

/// Install the global subscriber
///
/// Logs go to `log_file` (appended) when given, otherwise to stderr.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = build_env_filter(level_for_verbosity(verbosity));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
    .context("failed to install log subscriber")
}
