//! Progress store facade
//!
//! Resolves question ids to their scheduling records, defaulting for
//! questions that have never been touched, and orchestrates the two
//! store writes a recorded attempt produces: the log append and the
//! record upsert.

use chrono::{DateTime, Utc};
use log::debug;

use crate::storage::{ProgressBackend, Result};

use super::models::{AttemptLogEntry, AttemptMode, ProgressRecord};
use super::scheduler;

pub struct ProgressStore<B: ProgressBackend> {
    backend: B,
}

impl<B: ProgressBackend> ProgressStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Record for a question, defaulting when absent
    ///
    /// The default is constructed in memory and NOT persisted; callers
    /// that want it durable must `put` it explicitly.
    pub fn get(&self, question_id: i64) -> Result<ProgressRecord> {
        Ok(self
            .backend
            .get(question_id)?
            .unwrap_or_else(|| ProgressRecord::new(question_id)))
    }

    /// All persisted records
    pub fn get_all(&self) -> Result<Vec<ProgressRecord>> {
        self.backend.get_all()
    }

    /// Upsert by question id, last write wins
    pub fn put(&mut self, record: &ProgressRecord) -> Result<()> {
        self.backend.put(record)
    }

    /// Record an attempt outcome and return the updated record
    ///
    /// The log entry is appended before the record write so attempt
    /// history exists even if the record write fails. The two writes
    /// are independent store operations with no joint transaction; on
    /// failure of either, the error of that operation is surfaced and
    /// the other side is left as-is. Retrying a failed call may append
    /// a duplicate log entry.
    pub fn record_attempt(
        &mut self,
        question_id: i64,
        correct: bool,
        mode: AttemptMode,
        now: DateTime<Utc>,
    ) -> Result<ProgressRecord> {
        let current = self.get(question_id)?;

        let entry = AttemptLogEntry::new(question_id, correct, mode, now);
        let log_id = self.backend.add_attempt(&entry)?;
        debug!(
            "logged attempt {} for question {} (correct: {}, mode: {})",
            log_id,
            question_id,
            correct,
            mode.as_str()
        );

        let updated = scheduler::apply_attempt(&current, correct, now);
        self.backend.put(&updated)?;
        Ok(updated)
    }

    /// Flip the bookmark flag, persisting the result
    ///
    /// The only mutation that bypasses the scheduler; scheduling fields
    /// are untouched.
    pub fn toggle_bookmark(&mut self, question_id: i64) -> Result<ProgressRecord> {
        let mut record = self.get(question_id)?;
        record.bookmarked = !record.bookmarked;
        self.backend.put(&record)?;
        Ok(record)
    }

    /// Attempt history for a question, most recent first
    pub fn history(&self, question_id: i64) -> Result<Vec<AttemptLogEntry>> {
        self.backend.attempts_for(question_id)
    }
}
