//! Tracing subscriber setup.
//!
//! Logs go to a daily-rotated file under `~/.focuskit/logs/` and, with
//! `--verbose`, to stderr as well.

use std::path::Path;

use tracing_appender::rolling::{Builder, Rotation};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::FocusError;

const LOG_PREFIX: &str = "focuskit";
const MAX_LOG_FILES: usize = 7;

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(config: &LoggingConfig, verbose: bool) -> String {
    let level = if verbose { "debug" } else { config.level.as_str() };
    format!("{}={level}", env!("CARGO_PKG_NAME").replace('-', "_"))
}

/// Install the global subscriber.
///
/// Calling this twice is harmless: the second call leaves the first
/// subscriber in place.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or opened.
pub fn init(config: &LoggingConfig, logs_dir: &Path, verbose: bool) -> Result<(), FocusError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config, verbose)));

    let stderr = std::io::stderr.with_filter(move |_| verbose);
    let writer = if config.file {
        // The appender prunes old files on build and complains about a missing dir
        std::fs::create_dir_all(logs_dir).map_err(|e| {
            FocusError::Config(format!(
                "Failed to create log directory {}: {e}",
                logs_dir.display()
            ))
        })?;
        let appender = Builder::new()
            .rotation(Rotation::DAILY)
            .max_log_files(MAX_LOG_FILES)
            .filename_prefix(LOG_PREFIX)
            .filename_suffix("log")
            .build(logs_dir)
            .map_err(|e| {
                FocusError::Config(format!(
                    "Failed to open log directory {}: {e}",
                    logs_dir.display()
                ))
            })?;
        BoxMakeWriter::new(stderr.and(appender))
    } else {
        BoxMakeWriter::new(stderr)
    };

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("subscriber already installed");
    }
    Ok(())
}
