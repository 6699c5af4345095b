use anyhow::Result;
use chrono::Utc;

use quizdrill_lib::progress::stats;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let summary = stats(app.bank.questions(), &app.store, Utc::now())?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            println!("Questions:  {}", summary.total_questions);
            println!("Attempted:  {}", summary.attempted);
            println!("Due:        {}", summary.due);
            println!("Weak:       {}", summary.weak);
            println!("Bookmarked: {}", summary.bookmarked);
            println!("Attempts:   {}", summary.total_attempts);
            match summary.accuracy {
                Some(accuracy) => println!("Accuracy:   {:.0}%", accuracy * 100.0),
                None => println!("Accuracy:   -"),
            }
        }
    }

    Ok(())
}
