use anyhow::Result;
use chrono::Utc;

use quizdrill_lib::progress::AttemptMode;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    format: &OutputFormat,
    question_id: i64,
    correct: bool,
    mode: AttemptMode,
) -> Result<()> {
    app.find_question(question_id)?;

    let updated = app
        .store
        .record_attempt(question_id, correct, mode, Utc::now())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        OutputFormat::Plain => {
            let outcome = if correct { "correct" } else { "incorrect" };
            println!("Recorded {} attempt for #{}.", outcome, question_id);
            println!(
                "Streak: {}  Interval: {}d  Ease: {:.2}",
                updated.streak, updated.interval, updated.ease_factor
            );
            if let Some(next) = updated.next_review_at {
                println!("Next review: {}", super::format_timestamp(next));
            }
        }
    }

    Ok(())
}
