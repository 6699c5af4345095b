use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, question_id: i64, limit: usize) -> Result<()> {
    app.find_question(question_id)?;

    let mut entries = app.store.history(question_id)?;
    entries.truncate(limit);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Plain => {
            if entries.is_empty() {
                println!("No attempts recorded for #{}.", question_id);
                return Ok(());
            }
            for entry in &entries {
                let outcome = if entry.correct { "correct" } else { "wrong" };
                println!(
                    "{}  {:<9} ({})",
                    super::format_timestamp(entry.timestamp),
                    outcome,
                    entry.mode.as_str()
                );
            }
        }
    }

    Ok(())
}
