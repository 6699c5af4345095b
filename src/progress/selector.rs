//! Question set derivations
//!
//! Pure read-only views over the question list and the progress store:
//! due, weak and bookmarked subsets plus an aggregate summary. All are
//! recomputed on demand in O(number of questions); nothing is
//! maintained incrementally.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::questions::Question;
use crate::storage::{ProgressBackend, Result};

use super::store::ProgressStore;

/// Accuracy below this marks an attempted question as weak
pub const WEAK_ACCURACY_THRESHOLD: f32 = 0.6;

/// Questions due for presentation: never attempted, or past their
/// scheduled review time. Input order is preserved.
pub fn due_questions<'a, B: ProgressBackend>(
    questions: &'a [Question],
    store: &ProgressStore<B>,
    now: DateTime<Utc>,
) -> Result<Vec<&'a Question>> {
    let mut due = Vec::new();
    for question in questions {
        if store.get(question.id)?.is_due(now) {
            due.push(question);
        }
    }
    Ok(due)
}

/// Questions answered below the weak threshold
///
/// Only attempted questions qualify; a question with zero attempts is
/// never weak.
pub fn weak_questions<'a, B: ProgressBackend>(
    questions: &'a [Question],
    store: &ProgressStore<B>,
) -> Result<Vec<&'a Question>> {
    let mut weak = Vec::new();
    for question in questions {
        let record = store.get(question.id)?;
        if record
            .accuracy()
            .map_or(false, |a| a < WEAK_ACCURACY_THRESHOLD)
        {
            weak.push(question);
        }
    }
    Ok(weak)
}

/// Bookmarked questions, in input order
pub fn bookmarked_questions<'a, B: ProgressBackend>(
    questions: &'a [Question],
    store: &ProgressStore<B>,
) -> Result<Vec<&'a Question>> {
    let mut bookmarked = Vec::new();
    for question in questions {
        if store.get(question.id)?.bookmarked {
            bookmarked.push(question);
        }
    }
    Ok(bookmarked)
}

/// Aggregate progress summary for a question list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_questions: usize,
    pub attempted: usize,
    pub due: usize,
    pub weak: usize,
    pub bookmarked: usize,
    pub total_attempts: i64,
    pub correct_attempts: i64,
    /// Overall accuracy over all recorded attempts; None before any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f32>,
}

/// Compute the aggregate summary in a single pass
pub fn stats<B: ProgressBackend>(
    questions: &[Question],
    store: &ProgressStore<B>,
    now: DateTime<Utc>,
) -> Result<ProgressStats> {
    let mut stats = ProgressStats {
        total_questions: questions.len(),
        attempted: 0,
        due: 0,
        weak: 0,
        bookmarked: 0,
        total_attempts: 0,
        correct_attempts: 0,
        accuracy: None,
    };

    for question in questions {
        let record = store.get(question.id)?;
        if record.attempts > 0 {
            stats.attempted += 1;
        }
        if record.is_due(now) {
            stats.due += 1;
        }
        if record
            .accuracy()
            .map_or(false, |a| a < WEAK_ACCURACY_THRESHOLD)
        {
            stats.weak += 1;
        }
        if record.bookmarked {
            stats.bookmarked += 1;
        }
        stats.total_attempts += record.attempts as i64;
        stats.correct_attempts += record.correct_count as i64;
    }

    if stats.total_attempts > 0 {
        stats.accuracy = Some(stats.correct_attempts as f32 / stats.total_attempts as f32);
    }

    Ok(stats)
}
