use anyhow::Result;
use chrono::Utc;

use quizdrill_lib::progress::due_questions;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, limit: Option<usize>) -> Result<()> {
    let now = Utc::now();
    let mut due = due_questions(app.bank.questions(), &app.store, now)?;
    let total = due.len();
    if let Some(limit) = limit {
        due.truncate(limit);
    }

    match format {
        OutputFormat::Json => {
            let mut output = Vec::new();
            for question in &due {
                let progress = app.store.get(question.id)?;
                output.push(serde_json::json!({
                    "id": question.id,
                    "category": question.category,
                    "question": question.question,
                    "attempts": progress.attempts,
                    "nextReviewAt": progress.next_review_at,
                }));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if due.is_empty() {
                println!("Nothing due. All caught up.");
                return Ok(());
            }
            println!("{} due ({} shown):", total, due.len());
            for question in &due {
                println!("{}", super::question_line(question));
            }
        }
    }

    Ok(())
}
