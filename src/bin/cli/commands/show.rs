use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, question_id: i64) -> Result<()> {
    let question = app.find_question(question_id)?;
    let progress = app.store.get(question_id)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "question": question,
                "progress": progress,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("#{} [{}]", question.id, super::category_label(question));
            println!("{}", question.question);
            println!();
            for (index, option) in question.options.iter().enumerate() {
                let letter = (b'a' + index as u8) as char;
                println!("  {}) {}", letter, option);
            }
            if !question.explanation.is_empty() {
                println!();
                println!("{}", question.explanation);
            }
            println!();
            if progress.attempts == 0 {
                println!("Never attempted (due now)");
            } else {
                let accuracy = progress.accuracy().unwrap_or(0.0) * 100.0;
                println!(
                    "Attempts: {} ({} correct, {:.0}%)  Streak: {}",
                    progress.attempts, progress.correct_count, accuracy, progress.streak
                );
                println!(
                    "Interval: {}d  Ease: {:.2}",
                    progress.interval, progress.ease_factor
                );
                if let Some(next) = progress.next_review_at {
                    let due = if next <= Utc::now() { " (due)" } else { "" };
                    println!("Next review: {}{}", super::format_timestamp(next), due);
                }
            }
            if progress.bookmarked {
                println!("Bookmarked");
            }
        }
    }

    Ok(())
}
