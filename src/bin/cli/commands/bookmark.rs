use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, format: &OutputFormat, question_id: i64) -> Result<()> {
    app.find_question(question_id)?;
    let updated = app.store.toggle_bookmark(question_id)?;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "id": question_id,
                    "bookmarked": updated.bookmarked,
                })
            );
        }
        OutputFormat::Plain => {
            if updated.bookmarked {
                println!("Bookmarked #{}.", question_id);
            } else {
                println!("Removed bookmark from #{}.", question_id);
            }
        }
    }

    Ok(())
}
