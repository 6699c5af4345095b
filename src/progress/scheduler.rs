//! Spaced Repetition Scheduling
//!
//! Simplified SM-2 variant working from a boolean outcome instead of the
//! 0-5 quality scale. Review intervals are keyed off the current streak:
//! first correct answer comes back in 1 day, second in 6, afterwards the
//! previous interval is multiplied by the ease factor. A miss resets the
//! streak and schedules the question for tomorrow.
//!
//! The transformation is pure: it does not touch storage and never reads
//! the wall clock. The caller supplies `now` and persists the result.

use chrono::{DateTime, Duration, Utc};

use super::models::ProgressRecord;

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f32 = 1.3;

/// Ease bump applied after every correct answer; growth is uncapped
const EASE_BONUS: f32 = 0.1;

/// Ease penalty applied after every miss, floored at `MIN_EASE_FACTOR`
const EASE_PENALTY: f32 = 0.2;

/// Compute the record state after one attempt
///
/// # Arguments
/// * `record` - Current scheduling state (possibly freshly defaulted)
/// * `correct` - Outcome of the attempt
/// * `now` - Reference time for `last_attempted_at` and the next review
///
/// # Returns
/// The fully updated record. The input record is left untouched.
pub fn apply_attempt(record: &ProgressRecord, correct: bool, now: DateTime<Utc>) -> ProgressRecord {
    let mut next = record.clone();
    next.attempts += 1;
    next.last_attempted_at = Some(now);

    if correct {
        next.correct_count += 1;
        next.streak += 1;

        // Interval is keyed on the streak, not on elapsed time. The
        // growth step multiplies the interval and ease factor as they
        // were before this attempt.
        next.interval = match next.streak {
            1 => 1,
            2 => 6,
            _ => (record.interval as f32 * record.ease_factor).round() as i32,
        };
        next.ease_factor = record.ease_factor + EASE_BONUS;
    } else {
        // Review again tomorrow
        next.streak = 0;
        next.interval = 1;
        next.ease_factor = (record.ease_factor - EASE_PENALTY).max(MIN_EASE_FACTOR);
    }

    next.next_review_at = Some(now + Duration::days(next.interval as i64));
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn test_first_correct_answer() {
        let now = fixed_now();
        let updated = apply_attempt(&ProgressRecord::new(1), true, now);

        assert_eq!(updated.attempts, 1);
        assert_eq!(updated.correct_count, 1);
        assert_eq!(updated.streak, 1);
        assert_eq!(updated.interval, 1);
        assert!((updated.ease_factor - 2.6).abs() < 1e-5);
        assert_eq!(updated.last_attempted_at, Some(now));
        assert_eq!(updated.next_review_at, Some(now + Duration::days(1)));
    }

    #[test]
    fn test_second_correct_answer() {
        let now = fixed_now();
        let first = apply_attempt(&ProgressRecord::new(1), true, now);
        let second = apply_attempt(&first, true, now);

        assert_eq!(second.streak, 2);
        assert_eq!(second.interval, 6);
        assert!((second.ease_factor - 2.7).abs() < 1e-5);
        assert_eq!(second.next_review_at, Some(now + Duration::days(6)));
    }

    #[test]
    fn test_third_correct_answer_multiplies_interval() {
        let now = fixed_now();
        let mut record = ProgressRecord::new(1);
        for _ in 0..3 {
            record = apply_attempt(&record, true, now);
        }

        // round(6 * 2.7) = 16
        assert_eq!(record.streak, 3);
        assert_eq!(record.interval, 16);
        assert!((record.ease_factor - 2.8).abs() < 1e-5);
    }

    #[test]
    fn test_interval_rounds_half_up() {
        let now = fixed_now();
        let mut record = ProgressRecord::new(1);
        record.streak = 2;
        record.interval = 5;
        record.ease_factor = 2.5;

        // 5 * 2.5 = 12.5 -> 13
        let updated = apply_attempt(&record, true, now);
        assert_eq!(updated.interval, 13);
    }

    #[test]
    fn test_miss_resets_streak_and_interval() {
        let now = fixed_now();
        let mut record = ProgressRecord::new(1);
        record.attempts = 8;
        record.correct_count = 6;
        record.streak = 5;
        record.interval = 40;
        record.ease_factor = 1.35;

        let updated = apply_attempt(&record, false, now);

        assert_eq!(updated.streak, 0);
        assert_eq!(updated.interval, 1);
        assert!((updated.ease_factor - 1.3).abs() < 1e-5);
        assert_eq!(updated.correct_count, 6);
        assert_eq!(updated.attempts, 9);
        assert_eq!(updated.next_review_at, Some(now + Duration::days(1)));
    }

    #[test]
    fn test_ease_factor_never_below_minimum() {
        let now = fixed_now();
        let mut record = ProgressRecord::new(1);
        for _ in 0..20 {
            record = apply_attempt(&record, false, now);
            assert!(record.ease_factor >= MIN_EASE_FACTOR);
        }
        assert!((record.ease_factor - MIN_EASE_FACTOR).abs() < 1e-5);
    }

    #[test]
    fn test_ease_factor_growth_is_uncapped() {
        let now = fixed_now();
        let mut record = ProgressRecord::new(1);
        for _ in 0..30 {
            record = apply_attempt(&record, true, now);
        }
        assert!(record.ease_factor > 5.0);
    }

    #[test]
    fn test_correct_count_never_exceeds_attempts() {
        let now = fixed_now();
        let outcomes = [true, true, false, true, false, false, true, true, true, false];
        let mut record = ProgressRecord::new(1);
        for &correct in &outcomes {
            record = apply_attempt(&record, correct, now);
            assert!(record.correct_count <= record.attempts);
        }
        assert_eq!(record.attempts, 10);
        assert_eq!(record.correct_count, 6);
    }

    #[test]
    fn test_streak_rebuilds_after_miss() {
        let now = fixed_now();
        let mut record = ProgressRecord::new(1);
        record = apply_attempt(&record, true, now);
        record = apply_attempt(&record, true, now);
        record = apply_attempt(&record, false, now);
        record = apply_attempt(&record, true, now);

        // back at streak 1 -> 1-day interval again
        assert_eq!(record.streak, 1);
        assert_eq!(record.interval, 1);
    }

    #[test]
    fn test_bookmark_flag_untouched() {
        let now = fixed_now();
        let mut record = ProgressRecord::new(1);
        record.bookmarked = true;

        let updated = apply_attempt(&record, true, now);
        assert!(updated.bookmarked);
    }
}
