//! Feature implementations for focuskit.
//!
//! - Focus timer and session ledger
//! - Statistics over the ledger

pub mod focus;
pub mod stats;
