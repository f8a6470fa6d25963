//! Statistics command implementation.
//!
//! Computes focus statistics and achievements from the session ledger.

use chrono::NaiveDate;
use tracing::debug;

use crate::cli::args::{OutputFormat, StatsArgs};
use crate::config::Config;
use crate::error::FocusError;
use crate::features::focus::{Clock, SessionLedger, SystemClock};
use crate::features::stats::{evaluate, FocusStats};
use crate::output::format_stats;

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the ledger cannot be read or output formatting fails.
pub fn stats<L: SessionLedger + ?Sized>(
    ledger: &L,
    config: &Config,
    args: &StatsArgs,
    format: OutputFormat,
) -> Result<String, FocusError> {
    stats_as_of(ledger, config, args, format, SystemClock.today())
}

fn stats_as_of<L: SessionLedger + ?Sized>(
    ledger: &L,
    config: &Config,
    args: &StatsArgs,
    format: OutputFormat,
    today: NaiveDate,
) -> Result<String, FocusError> {
    let sessions = ledger.read_all()?;
    let stats = FocusStats::compute(&sessions, today, args.period);
    let goals = config.goals();
    let achievements = evaluate(&stats, &goals);
    debug!(
        sessions = sessions.len(),
        achievements = achievements.len(),
        "computed stats"
    );

    format_stats(&stats, &achievements, &goals, format)
}
