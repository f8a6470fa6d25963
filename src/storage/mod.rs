//! Storage layer for focuskit.
//!
//! Schema migrations for the `SQLite` session ledger.

mod migrations;

pub use migrations::run as migrate;
