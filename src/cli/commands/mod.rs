//! Command implementations for focuskit.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod history;
mod run;
mod stats;

pub use config::config;
pub use history::history;
pub use run::run;
pub use stats::stats;

use clap::CommandFactory;
use clap_complete::Shell;
use tracing::warn;

use crate::cli::args::Cli;
use crate::config::{Config, Paths, StorageBackend};
use crate::error::FocusError;
use crate::features::focus::{JsonFileLedger, MemoryLedger, SessionLedger, SqliteLedger};

/// Open the ledger selected by `storage.backend`.
///
/// # Errors
///
/// Returns an error if the data directory or database cannot be opened.
pub fn open_ledger(config: &Config, paths: &Paths) -> Result<Box<dyn SessionLedger>, FocusError> {
    match config.storage.backend {
        StorageBackend::Sqlite => {
            paths.ensure_dirs()?;
            Ok(Box::new(SqliteLedger::open(&paths.database)?))
        }
        StorageBackend::Json => {
            paths.ensure_dirs()?;
            Ok(Box::new(JsonFileLedger::new(paths.sessions_json.clone())))
        }
        StorageBackend::Memory => Ok(Box::new(MemoryLedger::new())),
    }
}

/// Open the configured ledger for a timer, falling back to memory.
///
/// A timer never refuses to run because its ledger is unavailable; sessions
/// are then kept for the lifetime of the process only.
pub fn open_timer_ledger(config: &Config, paths: &Paths) -> Box<dyn SessionLedger> {
    open_ledger(config, paths).unwrap_or_else(|e| {
        warn!(error = %e, "session ledger unavailable, keeping sessions in memory");
        Box::new(MemoryLedger::new())
    })
}

/// Generate a completion script for `shell`.
#[must_use]
pub fn completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "focuskit", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::{FocusSession, Phase};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn session(id: i64) -> FocusSession {
        FocusSession {
            id,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            duration: 25,
            session_type: Phase::Focus,
            completed: true,
        }
    }

    #[test]
    fn test_open_each_backend() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        for backend in [
            StorageBackend::Sqlite,
            StorageBackend::Json,
            StorageBackend::Memory,
        ] {
            let mut config = Config::default();
            config.storage.backend = backend;

            let mut ledger = open_ledger(&config, &paths).unwrap();
            ledger.append(session(1)).unwrap();
            assert_eq!(ledger.read_all().unwrap().len(), 1);
        }

        assert!(paths.database.exists());
        assert!(paths.sessions_json.exists());
    }

    #[test]
    fn test_timer_ledger_falls_back_to_memory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();
        let paths = Paths::with_root(blocker.join("home"));

        let config = Config::default();
        assert!(open_ledger(&config, &paths).is_err());

        let mut ledger = open_timer_ledger(&config, &paths);
        ledger.append(session(1)).unwrap();
        assert_eq!(ledger.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_completions_mention_commands() {
        let script = completions(Shell::Bash);
        assert!(script.contains("focuskit"));
        assert!(script.contains("history"));
    }
}
