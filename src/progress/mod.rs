//! Progress tracking and spaced-repetition scheduling
//!
//! This module provides:
//! - Per-question scheduling state (`ProgressRecord`)
//! - The pure scheduling transformation (`scheduler::apply_attempt`)
//! - A store facade with defaulting reads and attempt logging
//! - Due / weak / bookmarked set derivations

pub mod models;
pub mod scheduler;
pub mod selector;
pub mod store;

pub use models::{AttemptLogEntry, AttemptMode, ProgressRecord};
pub use selector::{
    bookmarked_questions, due_questions, stats, weak_questions, ProgressStats,
    WEAK_ACCURACY_THRESHOLD,
};
pub use store::ProgressStore;
