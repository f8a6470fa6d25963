//! Focus session storage.
//!
//! Persists the session ledger to a local `SQLite` file. The schema is
//! migrated on open.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, ErrorCode, Row};
use tracing::debug;

use super::ledger::SessionLedger;
use super::session::{FocusSession, Phase};
use crate::error::FocusError;
use crate::storage::migrate;

/// `SQLite` backed session ledger.
pub struct SqliteLedger {
    conn: Connection,
}

impl SqliteLedger {
    /// Open the ledger file at `path`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the schema cannot be
    /// migrated.
    pub fn open(path: &Path) -> Result<Self, FocusError> {
        let conn = Connection::open(path).map_err(|e| {
            FocusError::Database(format!("Failed to open ledger {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "opened session ledger");
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, FocusError> {
        migrate(&conn)?;
        Ok(Self { conn })
    }
}

impl SessionLedger for SqliteLedger {
    fn append(&mut self, session: FocusSession) -> Result<(), FocusError> {
        self.conn
            .execute(
                r"INSERT INTO focus_sessions
                  (id, date, duration_minutes, session_type, completed)
                  VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    session.id,
                    session.date.to_string(),
                    session.duration,
                    session.session_type.as_str(),
                    session.completed,
                ],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    FocusError::DuplicateId(session.id)
                }
                e => FocusError::Database(format!("Failed to insert session: {e}")),
            })?;

        Ok(())
    }

    fn read_all(&self) -> Result<Vec<FocusSession>, FocusError> {
        let mut stmt = self
            .conn
            .prepare(
                r"SELECT id, date, duration_minutes, session_type, completed
                  FROM focus_sessions
                  ORDER BY seq ASC",
            )
            .map_err(|e| FocusError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_session)
            .map_err(|e| FocusError::Database(format!("Failed to query sessions: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| FocusError::Database(e.to_string()))
    }
}

fn row_to_session(row: &Row<'_>) -> Result<FocusSession, rusqlite::Error> {
    let date_str: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    let phase_str: String = row.get(3)?;
    let session_type = Phase::parse(&phase_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Text,
            Box::new(FocusError::InvalidArgument(format!(
                "unknown session type '{phase_str}'"
            ))),
        )
    })?;

    Ok(FocusSession {
        id: row.get(0)?,
        date,
        duration: row.get(2)?,
        session_type,
        completed: row.get(4)?,
    })
}
