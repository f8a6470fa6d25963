//! Append-only session ledger.
//!
//! The timer is the only writer; history and statistics views read the whole
//! ledger back in insertion order.

use std::path::PathBuf;

use tracing::{debug, warn};

use super::session::FocusSession;
use crate::error::FocusError;

/// Typed storage port for focus session records.
#[cfg_attr(test, mockall::automock)]
pub trait SessionLedger {
    /// Append one record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn append(&mut self, session: FocusSession) -> Result<(), FocusError>;

    /// Read every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read_all(&self) -> Result<Vec<FocusSession>, FocusError>;
}

impl<L: SessionLedger + ?Sized> SessionLedger for Box<L> {
    fn append(&mut self, session: FocusSession) -> Result<(), FocusError> {
        (**self).append(session)
    }

    fn read_all(&self) -> Result<Vec<FocusSession>, FocusError> {
        (**self).read_all()
    }
}

/// Ledger kept in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    sessions: Vec<FocusSession>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sessions: Vec::new(),
        }
    }
}

impl SessionLedger for MemoryLedger {
    fn append(&mut self, session: FocusSession) -> Result<(), FocusError> {
        self.sessions.push(session);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<FocusSession>, FocusError> {
        Ok(self.sessions.clone())
    }
}

/// Ledger stored as a single JSON array file.
///
/// Every append rewrites the file, mirroring a key-value store that holds the
/// whole session list under one key.
#[derive(Debug, Clone)]
pub struct JsonFileLedger {
    path: PathBuf,
}

impl JsonFileLedger {
    /// Use the file at `path`. It is created on first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionLedger for JsonFileLedger {
    fn append(&mut self, session: FocusSession) -> Result<(), FocusError> {
        let mut sessions = self.read_all()?;
        sessions.push(session);

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&sessions)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<FocusSession>, FocusError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Ids tried after a collision before the backend is given up on.
const MAX_ID_RETRIES: u32 = 16;

/// Wraps a durable ledger and falls back to memory when it fails.
///
/// Appends through this wrapper never fail. An id the backend already holds
/// is bumped and retried. After any other backend error the ledger stays
/// degraded for the rest of its life and keeps new records in memory only.
#[derive(Debug)]
pub struct FallbackLedger<L> {
    inner: L,
    spill: MemoryLedger,
    degraded: bool,
}

impl<L: SessionLedger> FallbackLedger<L> {
    /// Wrap `inner`.
    pub const fn new(inner: L) -> Self {
        Self {
            inner,
            spill: MemoryLedger::new(),
            degraded: false,
        }
    }

    /// Append a record, degrading to memory if the backend refuses it.
    ///
    /// Returns the record as stored. Its id differs from the one passed in
    /// when that id was already taken.
    pub fn record(&mut self, mut session: FocusSession) -> FocusSession {
        if !self.degraded {
            match self.append_with_free_id(&mut session) {
                Ok(()) => {
                    debug!(id = session.id, "session appended to ledger");
                    return session;
                }
                Err(e) => {
                    warn!(error = %e, "ledger unavailable, keeping sessions in memory");
                    self.degraded = true;
                }
            }
        }
        self.spill.sessions.push(session.clone());
        session
    }

    fn append_with_free_id(&mut self, session: &mut FocusSession) -> Result<(), FocusError> {
        let mut retries = 0;
        loop {
            match self.inner.append(session.clone()) {
                Err(FocusError::DuplicateId(id)) if retries < MAX_ID_RETRIES => {
                    debug!(id, "session id taken, trying the next one");
                    session.id = id.saturating_add(1);
                    retries += 1;
                }
                result => return result,
            }
        }
    }

    /// Check whether the backend has failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }
}

impl<L: SessionLedger> SessionLedger for FallbackLedger<L> {
    fn append(&mut self, session: FocusSession) -> Result<(), FocusError> {
        self.record(session);
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<FocusSession>, FocusError> {
        let mut sessions = match self.inner.read_all() {
            Ok(sessions) => sessions,
            Err(e) if self.degraded => {
                warn!(error = %e, "ledger unreadable, returning in-memory sessions");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        sessions.extend(self.spill.sessions.iter().cloned());
        Ok(sessions)
    }
}
