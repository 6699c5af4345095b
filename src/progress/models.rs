//! Data models for progress tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session mode an attempt was made in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttemptMode {
    /// Free practice over the due queue
    Practice,
    /// Timed exam simulation
    Exam,
    /// Browsing questions one by one
    Study,
}

impl AttemptMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AttemptMode::Practice => "practice",
            AttemptMode::Exam => "exam",
            AttemptMode::Study => "study",
        }
    }
}

impl Default for AttemptMode {
    fn default() -> Self {
        Self::Practice
    }
}

/// Scheduling state for a single question
///
/// One record per question, keyed by the question's id in the bank.
/// A record springs into existence with `ProgressRecord::new` the first
/// time a question is referenced and is mutated by every recorded
/// attempt or bookmark toggle; it is never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub question_id: i64,
    /// Total recorded attempts
    #[serde(default)]
    pub attempts: i32,
    /// Correct attempts; never exceeds `attempts`
    #[serde(default)]
    pub correct_count: i32,
    /// None until the first attempt is recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attempted_at: Option<DateTime<Utc>>,
    /// When the question should next be presented; None for a fresh record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review_at: Option<DateTime<Utc>>,
    /// Interval growth multiplier, >= 1.3
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f32,
    /// Days until the next review
    #[serde(default)]
    pub interval: i32,
    /// Consecutive correct answers since the last miss
    #[serde(default)]
    pub streak: i32,
    /// User-toggled flag, independent of scheduling
    #[serde(default)]
    pub bookmarked: bool,
}

fn default_ease_factor() -> f32 {
    2.5
}

impl ProgressRecord {
    pub fn new(question_id: i64) -> Self {
        Self {
            question_id,
            attempts: 0,
            correct_count: 0,
            last_attempted_at: None,
            next_review_at: None,
            ease_factor: default_ease_factor(),
            interval: 0,
            streak: 0,
            bookmarked: false,
        }
    }

    /// Check if the question is due for presentation
    ///
    /// A never-attempted question is due regardless of `next_review_at`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.attempts == 0 || self.next_review_at.map_or(false, |due| due <= now)
    }

    /// Fraction of attempts answered correctly; None before the first attempt
    pub fn accuracy(&self) -> Option<f32> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.correct_count as f32 / self.attempts as f32)
        }
    }
}

/// One immutable log entry per recorded attempt
///
/// Written before the progress record is updated so that attempt history
/// survives a failed record write. Used for history display, never
/// consulted by the scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptLogEntry {
    /// Store-assigned, monotonically increasing; None until appended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub question_id: i64,
    pub timestamp: DateTime<Utc>,
    pub correct: bool,
    #[serde(default)]
    pub mode: AttemptMode,
}

impl AttemptLogEntry {
    pub fn new(question_id: i64, correct: bool, mode: AttemptMode, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: None,
            question_id,
            timestamp,
            correct,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_record_defaults() {
        let record = ProgressRecord::new(42);
        assert_eq!(record.question_id, 42);
        assert_eq!(record.attempts, 0);
        assert_eq!(record.correct_count, 0);
        assert_eq!(record.last_attempted_at, None);
        assert_eq!(record.next_review_at, None);
        assert!((record.ease_factor - 2.5).abs() < f32::EPSILON);
        assert_eq!(record.interval, 0);
        assert_eq!(record.streak, 0);
        assert!(!record.bookmarked);
    }

    #[test]
    fn test_fresh_record_is_due() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let record = ProgressRecord::new(1);
        assert!(record.is_due(now));
    }

    #[test]
    fn test_unattempted_record_is_due_even_with_future_review() {
        // attempts == 0 wins over any next_review_at value
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let mut record = ProgressRecord::new(1);
        record.next_review_at = Some(now + chrono::Duration::days(30));
        assert!(record.is_due(now));
    }

    #[test]
    fn test_attempted_record_due_by_timestamp() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let mut record = ProgressRecord::new(1);
        record.attempts = 3;
        record.next_review_at = Some(now - chrono::Duration::days(1));
        assert!(record.is_due(now));

        record.next_review_at = Some(now + chrono::Duration::days(1));
        assert!(!record.is_due(now));

        // exactly at the boundary counts as due
        record.next_review_at = Some(now);
        assert!(record.is_due(now));
    }

    #[test]
    fn test_accuracy() {
        let mut record = ProgressRecord::new(1);
        assert_eq!(record.accuracy(), None);

        record.attempts = 5;
        record.correct_count = 2;
        assert!((record.accuracy().unwrap() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_record_serde_round_trip() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let mut record = ProgressRecord::new(7);
        record.attempts = 2;
        record.correct_count = 1;
        record.last_attempted_at = Some(now);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("questionId"));
        assert!(json.contains("easeFactor"));
        // "never" timestamps are omitted entirely
        assert!(!json.contains("nextReviewAt"));

        let back: ProgressRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.question_id, 7);
        assert_eq!(back.attempts, 2);
        assert_eq!(back.next_review_at, None);
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&AttemptMode::Practice).unwrap(),
            "\"practice\""
        );
        assert_eq!(
            serde_json::from_str::<AttemptMode>("\"exam\"").unwrap(),
            AttemptMode::Exam
        );
    }
}
