//! In-memory backend
//!
//! Backs tests and callers that want an explicit cache-or-fetch layer
//! they own, instead of ambient shared state mirroring the store.

use std::collections::HashMap;

use crate::progress::{AttemptLogEntry, ProgressRecord};

use super::{ProgressBackend, Result};

pub struct MemoryBackend {
    records: HashMap<i64, ProgressRecord>,
    log: Vec<AttemptLogEntry>,
    next_log_id: i64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            log: Vec::new(),
            next_log_id: 1,
        }
    }

    /// Number of appended log entries
    pub fn log_len(&self) -> usize {
        self.log.len()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBackend for MemoryBackend {
    fn get(&self, question_id: i64) -> Result<Option<ProgressRecord>> {
        Ok(self.records.get(&question_id).cloned())
    }

    fn get_all(&self) -> Result<Vec<ProgressRecord>> {
        let mut records: Vec<ProgressRecord> = self.records.values().cloned().collect();
        records.sort_by_key(|r| r.question_id);
        Ok(records)
    }

    fn put(&mut self, record: &ProgressRecord) -> Result<()> {
        self.records.insert(record.question_id, record.clone());
        Ok(())
    }

    fn add_attempt(&mut self, entry: &AttemptLogEntry) -> Result<i64> {
        let id = self.next_log_id;
        self.next_log_id += 1;

        let mut stored = entry.clone();
        stored.id = Some(id);
        self.log.push(stored);
        Ok(id)
    }

    fn attempts_for(&self, question_id: i64) -> Result<Vec<AttemptLogEntry>> {
        let mut entries: Vec<AttemptLogEntry> = self
            .log
            .iter()
            .filter(|e| e.question_id == question_id)
            .cloned()
            .collect();
        entries.reverse();
        Ok(entries)
    }
}
