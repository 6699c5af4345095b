//! SQLite-backed progress store
//!
//! Two tables: `progress`, keyed by question id, holds the scheduling
//! state; `attempt_log` is append-only with an AUTOINCREMENT primary
//! key providing the store-assigned monotone entry id. Timestamps are
//! epoch milliseconds, NULL meaning "never".

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use crate::progress::{AttemptLogEntry, AttemptMode, ProgressRecord};

use super::{ProgressBackend, Result, StorageError};

pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open (or create) the database at the given path
    pub fn new(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS progress (
                question_id INTEGER PRIMARY KEY,
                attempts INTEGER NOT NULL DEFAULT 0,
                correct_count INTEGER NOT NULL DEFAULT 0,
                last_attempted_at INTEGER,
                next_review_at INTEGER,
                ease_factor REAL NOT NULL DEFAULT 2.5,
                interval INTEGER NOT NULL DEFAULT 0,
                streak INTEGER NOT NULL DEFAULT 0,
                bookmarked INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS attempt_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question_id INTEGER NOT NULL,
                timestamp INTEGER NOT NULL,
                correct INTEGER NOT NULL,
                mode TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_progress_next_review ON progress(next_review_at);
            CREATE INDEX IF NOT EXISTS idx_attempt_log_question ON attempt_log(question_id);
            "#,
        )?;

        debug!("opened progress database at {}", db_path.display());
        Ok(Self { conn })
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("quizdrill"))
            .ok_or(StorageError::DataDirNotFound)
    }
}

fn millis_to_datetime(ms: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or(StorageError::InvalidTimestamp(ms))
}

fn mode_from_str(s: &str) -> Result<AttemptMode> {
    match s {
        "practice" => Ok(AttemptMode::Practice),
        "exam" => Ok(AttemptMode::Exam),
        "study" => Ok(AttemptMode::Study),
        other => Err(StorageError::UnknownMode(other.to_string())),
    }
}

/// Raw `progress` row before timestamp conversion
type ProgressRow = (i64, i64, i64, Option<i64>, Option<i64>, f64, i64, i64, bool);

fn row_to_record(row: ProgressRow) -> Result<ProgressRecord> {
    let (question_id, attempts, correct_count, last_ms, next_ms, ease, interval, streak, bookmarked) =
        row;
    Ok(ProgressRecord {
        question_id,
        attempts: attempts as i32,
        correct_count: correct_count as i32,
        last_attempted_at: last_ms.map(millis_to_datetime).transpose()?,
        next_review_at: next_ms.map(millis_to_datetime).transpose()?,
        ease_factor: ease as f32,
        interval: interval as i32,
        streak: streak as i32,
        bookmarked,
    })
}

const PROGRESS_COLUMNS: &str = "question_id, attempts, correct_count, last_attempted_at, \
     next_review_at, ease_factor, interval, streak, bookmarked";

impl ProgressBackend for SqliteBackend {
    fn get(&self, question_id: i64) -> Result<Option<ProgressRecord>> {
        let row: Option<ProgressRow> = self
            .conn
            .query_row(
                &format!("SELECT {PROGRESS_COLUMNS} FROM progress WHERE question_id = ?1"),
                params![question_id],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                        row.get(5)?,
                        row.get(6)?,
                        row.get(7)?,
                        row.get(8)?,
                    ))
                },
            )
            .optional()?;

        row.map(row_to_record).transpose()
    }

    fn get_all(&self) -> Result<Vec<ProgressRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PROGRESS_COLUMNS} FROM progress ORDER BY question_id"))?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
                row.get(8)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row_to_record(row?)?);
        }
        Ok(records)
    }

    fn put(&mut self, record: &ProgressRecord) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO progress \
             (question_id, attempts, correct_count, last_attempted_at, next_review_at, \
              ease_factor, interval, streak, bookmarked) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                record.question_id,
                record.attempts,
                record.correct_count,
                record.last_attempted_at.map(|t| t.timestamp_millis()),
                record.next_review_at.map(|t| t.timestamp_millis()),
                record.ease_factor as f64,
                record.interval,
                record.streak,
                record.bookmarked,
            ],
        )?;
        Ok(())
    }

    fn add_attempt(&mut self, entry: &AttemptLogEntry) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO attempt_log (question_id, timestamp, correct, mode) \
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.question_id,
                entry.timestamp.timestamp_millis(),
                entry.correct,
                entry.mode.as_str(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn attempts_for(&self, question_id: i64) -> Result<Vec<AttemptLogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, question_id, timestamp, correct, mode \
             FROM attempt_log WHERE question_id = ?1 ORDER BY id DESC",
        )?;

        let rows = stmt.query_map(params![question_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, bool>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, question_id, ts, correct, mode) = row?;
            entries.push(AttemptLogEntry {
                id: Some(id),
                question_id,
                timestamp: millis_to_datetime(ts)?,
                correct,
                mode: mode_from_str(&mode)?,
            });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::TempDir;

    fn open_backend(dir: &TempDir) -> SqliteBackend {
        SqliteBackend::new(&dir.path().join("progress.db")).unwrap()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn test_get_absent_returns_none() {
        let dir = TempDir::new().unwrap();
        let backend = open_backend(&dir);
        assert!(backend.get(1).unwrap().is_none());
    }

    #[test]
    fn test_put_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut backend = open_backend(&dir);
        let now = fixed_now();

        let mut record = ProgressRecord::new(3);
        record.attempts = 4;
        record.correct_count = 3;
        record.last_attempted_at = Some(now);
        record.next_review_at = Some(now + Duration::days(6));
        record.ease_factor = 2.7;
        record.interval = 6;
        record.streak = 2;
        record.bookmarked = true;

        backend.put(&record).unwrap();

        let stored = backend.get(3).unwrap().unwrap();
        assert_eq!(stored.question_id, 3);
        assert_eq!(stored.attempts, 4);
        assert_eq!(stored.correct_count, 3);
        assert_eq!(stored.last_attempted_at, Some(now));
        assert_eq!(stored.next_review_at, Some(now + Duration::days(6)));
        assert!((stored.ease_factor - 2.7).abs() < 1e-5);
        assert_eq!(stored.interval, 6);
        assert_eq!(stored.streak, 2);
        assert!(stored.bookmarked);
    }

    #[test]
    fn test_never_timestamps_round_trip_as_none() {
        let dir = TempDir::new().unwrap();
        let mut backend = open_backend(&dir);

        backend.put(&ProgressRecord::new(9)).unwrap();

        let stored = backend.get(9).unwrap().unwrap();
        assert_eq!(stored.last_attempted_at, None);
        assert_eq!(stored.next_review_at, None);
    }

    #[test]
    fn test_put_is_upsert() {
        let dir = TempDir::new().unwrap();
        let mut backend = open_backend(&dir);

        let mut record = ProgressRecord::new(5);
        backend.put(&record).unwrap();
        record.attempts = 9;
        backend.put(&record).unwrap();

        assert_eq!(backend.get(5).unwrap().unwrap().attempts, 9);
        assert_eq!(backend.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_get_all_ordered_by_question_id() {
        let dir = TempDir::new().unwrap();
        let mut backend = open_backend(&dir);

        for id in [7, 2, 5] {
            backend.put(&ProgressRecord::new(id)).unwrap();
        }

        let ids: Vec<i64> = backend
            .get_all()
            .unwrap()
            .iter()
            .map(|r| r.question_id)
            .collect();
        assert_eq!(ids, vec![2, 5, 7]);
    }

    #[test]
    fn test_attempt_log_assigns_increasing_ids() {
        let dir = TempDir::new().unwrap();
        let mut backend = open_backend(&dir);
        let now = fixed_now();

        let entry = AttemptLogEntry::new(1, true, AttemptMode::Exam, now);
        let first = backend.add_attempt(&entry).unwrap();
        let second = backend.add_attempt(&entry).unwrap();
        assert!(second > first);

        let entries = backend.attempts_for(1).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, Some(second));
        assert_eq!(entries[0].mode, AttemptMode::Exam);
        assert_eq!(entries[0].timestamp, now);
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let now = fixed_now();
        let db_path = dir.path().join("progress.db");

        {
            let mut backend = SqliteBackend::new(&db_path).unwrap();
            let mut record = ProgressRecord::new(11);
            record.attempts = 1;
            backend.put(&record).unwrap();
            backend
                .add_attempt(&AttemptLogEntry::new(11, true, AttemptMode::Practice, now))
                .unwrap();
        }

        let backend = SqliteBackend::new(&db_path).unwrap();
        assert_eq!(backend.get(11).unwrap().unwrap().attempts, 1);
        assert_eq!(backend.attempts_for(11).unwrap().len(), 1);
    }
}
