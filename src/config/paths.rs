//! Path resolution for focuskit configuration and data files.
//!
//! All focuskit data is stored in `~/.focuskit/`:
//! - `config.yaml` - Main configuration file
//! - `focuskit.db` - `SQLite` session ledger
//! - `sessions.json` - JSON session ledger, when that backend is selected
//! - `logs/` - Daily-rotated log files

use std::path::PathBuf;

use crate::error::FocusError;

/// Paths to focuskit configuration and data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Root directory: `~/.focuskit/`
    pub root: PathBuf,
    /// Config file: `~/.focuskit/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.focuskit/focuskit.db`
    pub database: PathBuf,
    /// JSON ledger: `~/.focuskit/sessions.json`
    pub sessions_json: PathBuf,
    /// Log directory: `~/.focuskit/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FocusError> {
        let home = std::env::var("HOME")
            .map_err(|_| FocusError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".focuskit")))
    }

    /// Use `root` when given, otherwise the default under `$HOME`.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and the home directory cannot be
    /// determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, FocusError> {
        match root {
            Some(root) => Ok(Self::with_root(root)),
            None => Self::new(),
        }
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("focuskit.db"),
            sessions_json: root.join("sessions.json"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FocusError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    FocusError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}
