//! Error types for focuskit.

use thiserror::Error;

/// Errors produced by the focuskit library.
#[derive(Debug, Error)]
pub enum FocusError {
    /// Configuration could not be loaded, saved, or resolved.
    #[error("configuration error: {0}")]
    Config(String),

    /// The `SQLite` ledger failed.
    #[error("database error: {0}")]
    Database(String),

    /// A session with this id is already in the ledger.
    #[error("duplicate session id: {0}")]
    DuplicateId(i64),

    /// A requested item does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A command-line or config value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The terminal could not be set up or driven.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// JSON (de)serialization failed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for FocusError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}
