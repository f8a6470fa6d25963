//! Session history command.

use crate::cli::args::{HistoryArgs, OutputFormat};
use crate::error::FocusError;
use crate::features::focus::{FocusSession, SessionLedger};
use crate::output::format_history;

/// List recorded sessions, newest first.
///
/// # Errors
///
/// Returns an error if the ledger cannot be read or output formatting fails.
pub fn history<L: SessionLedger + ?Sized>(
    ledger: &L,
    args: &HistoryArgs,
    format: OutputFormat,
) -> Result<String, FocusError> {
    let sessions = recent_sessions(ledger.read_all()?, args);
    format_history(&sessions, format)
}

fn recent_sessions(sessions: Vec<FocusSession>, args: &HistoryArgs) -> Vec<FocusSession> {
    sessions
        .into_iter()
        .rev()
        .filter(|s| args.all || s.is_focus())
        .take(args.limit)
        .collect()
}
