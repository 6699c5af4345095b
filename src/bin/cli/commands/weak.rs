use anyhow::Result;

use quizdrill_lib::progress::weak_questions;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let weak = weak_questions(app.bank.questions(), &app.store)?;

    match format {
        OutputFormat::Json => {
            let mut output = Vec::new();
            for question in &weak {
                let progress = app.store.get(question.id)?;
                output.push(serde_json::json!({
                    "id": question.id,
                    "category": question.category,
                    "question": question.question,
                    "attempts": progress.attempts,
                    "correctCount": progress.correct_count,
                    "accuracy": progress.accuracy(),
                }));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if weak.is_empty() {
                println!("No weak questions.");
                return Ok(());
            }
            println!("{} weak:", weak.len());
            for question in &weak {
                let progress = app.store.get(question.id)?;
                let accuracy = progress.accuracy().unwrap_or(0.0) * 100.0;
                println!(
                    "{}  ({}/{} correct, {:.0}%)",
                    super::question_line(question),
                    progress.correct_count,
                    progress.attempts,
                    accuracy
                );
            }
        }
    }

    Ok(())
}
