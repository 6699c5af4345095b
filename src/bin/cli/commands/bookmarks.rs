use anyhow::Result;

use quizdrill_lib::progress::bookmarked_questions;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let bookmarked = bookmarked_questions(app.bank.questions(), &app.store)?;

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = bookmarked
                .iter()
                .map(|q| {
                    serde_json::json!({
                        "id": q.id,
                        "category": q.category,
                        "question": q.question,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if bookmarked.is_empty() {
                println!("No bookmarks.");
                return Ok(());
            }
            for question in &bookmarked {
                println!("{}", super::question_line(question));
            }
        }
    }

    Ok(())
}
