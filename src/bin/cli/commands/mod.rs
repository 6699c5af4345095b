pub mod answer;
pub mod bookmark;
pub mod bookmarks;
pub mod due;
pub mod history;
pub mod show;
pub mod stats;
pub mod weak;

use chrono::{DateTime, Utc};

use quizdrill_lib::questions::Question;

/// One-line listing for a question
pub fn question_line(question: &Question) -> String {
    format!(
        "{:>5}  [{}] {}",
        question.id,
        category_label(question),
        question.question
    )
}

pub fn category_label(question: &Question) -> String {
    if question.subcategory.is_empty() {
        question.category.clone()
    } else {
        format!("{}/{}", question.category, question.subcategory)
    }
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
