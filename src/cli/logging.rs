use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Env var holding the log filter, e.g. `SWIPEDECK_LOG=swipedeck=debug`
pub const LOG_ENV: &str = "SWIPEDECK_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// With `log_file`, logs are appended there. Otherwise interactive sessions log nowhere,
/// since the TUI owns the terminal, and other commands log to stderr.
pub fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .try_init()
                .context("Failed to install logger")?;
            tracing::info!(path = %path.display(), "logging initialized");
        }
        None if interactive => {
            tracing_subscriber::registry()
                .with(env_filter)
                .try_init()
                .context("Failed to install logger")?;
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(env_filter)
                .try_init()
                .context("Failed to install logger")?;
        }
    }
    Ok(())
}
