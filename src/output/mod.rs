//! Output formatting for focuskit.
//!
//! This module provides formatters for displaying sessions and statistics in
//! various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::FocusError;
use crate::features::focus::FocusSession;
use crate::features::stats::{Achievement, FocusStats, Goals};

pub use json::*;
pub use pretty::*;

/// Format session history based on output format
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_history(
    sessions: &[FocusSession],
    format: OutputFormat,
) -> Result<String, FocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(sessions)),
        OutputFormat::Json => format_history_json(sessions),
    }
}

/// Format statistics based on output format
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_stats(
    stats: &FocusStats,
    achievements: &[Achievement],
    goals: &Goals,
    format: OutputFormat,
) -> Result<String, FocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(stats, achievements, goals)),
        OutputFormat::Json => format_stats_json(stats, achievements),
    }
}
