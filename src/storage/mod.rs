//! Persistence backends for progress records and the attempt log
//!
//! The engine does not own its storage: callers inject anything
//! implementing [`ProgressBackend`]. Individual operations are assumed
//! atomic, but there is no transaction spanning a log append and a
//! record write — partial application on failure between the two is
//! possible and tolerated.

mod memory;
mod sqlite;

use thiserror::Error;

use crate::progress::{AttemptLogEntry, ProgressRecord};

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown attempt mode: {0}")]
    UnknownMode(String),

    #[error("Invalid stored timestamp: {0}")]
    InvalidTimestamp(i64),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Key-value persistence contract for scheduling state
///
/// `put` is an upsert by question id, last write wins; there is no
/// compare-and-swap, so concurrent writers to the same record can lose
/// updates (single-writer assumption). `add_attempt` appends to an
/// immutable log and returns the store-assigned, monotonically
/// increasing entry id. No update or delete is exposed for log entries.
pub trait ProgressBackend {
    /// Stored record for a question, or None if never persisted
    fn get(&self, question_id: i64) -> Result<Option<ProgressRecord>>;

    /// All persisted records, ordered by question id
    fn get_all(&self) -> Result<Vec<ProgressRecord>>;

    /// Insert or replace the record keyed by its question id
    fn put(&mut self, record: &ProgressRecord) -> Result<()>;

    /// Append a log entry, returning the assigned id
    fn add_attempt(&mut self, entry: &AttemptLogEntry) -> Result<i64>;

    /// Log entries for a question, most recent first
    fn attempts_for(&self, question_id: i64) -> Result<Vec<AttemptLogEntry>>;
}
