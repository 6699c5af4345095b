mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use quizdrill_lib::progress::AttemptMode;

#[derive(Parser)]
#[command(name = "quizdrill", about = "Quiz trainer with spaced-repetition scheduling", version)]
struct Cli {
    /// Data directory (default: platform-local app data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Question bank file (default: <data-dir>/questions.json)
    #[arg(long, global = true)]
    questions: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ModeArg {
    Practice,
    Exam,
    Study,
}

impl From<ModeArg> for AttemptMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Practice => AttemptMode::Practice,
            ModeArg::Exam => AttemptMode::Exam,
            ModeArg::Study => AttemptMode::Study,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List questions due for review
    Due {
        /// Maximum questions to list
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List questions answered below the weak threshold
    Weak,

    /// List bookmarked questions
    Bookmarks,

    /// Show progress statistics
    Stats,

    /// Show a question with its scheduling state
    Show {
        /// Question id
        question_id: i64,
    },

    /// Record an attempt for a question
    Answer {
        /// Question id
        question_id: i64,
        /// Record the attempt as incorrect
        #[arg(long)]
        incorrect: bool,
        /// Session mode to log
        #[arg(long, value_enum, default_value = "practice")]
        mode: ModeArg,
    },

    /// Toggle the bookmark flag on a question
    Bookmark {
        /// Question id
        question_id: i64,
    },

    /// Show attempt history for a question
    History {
        /// Question id
        question_id: i64,
        /// Maximum entries to list
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut app = app::App::new(cli.data_dir.as_deref(), cli.questions.as_deref())?;

    match cli.command {
        Command::Due { limit } => commands::due::run(&app, &cli.format, limit)?,
        Command::Weak => commands::weak::run(&app, &cli.format)?,
        Command::Bookmarks => commands::bookmarks::run(&app, &cli.format)?,
        Command::Stats => commands::stats::run(&app, &cli.format)?,
        Command::Show { question_id } => commands::show::run(&app, &cli.format, question_id)?,
        Command::Answer {
            question_id,
            incorrect,
            mode,
        } => commands::answer::run(&mut app, &cli.format, question_id, !incorrect, mode.into())?,
        Command::Bookmark { question_id } => {
            commands::bookmark::run(&mut app, &cli.format, question_id)?
        }
        Command::History { question_id, limit } => {
            commands::history::run(&app, &cli.format, question_id, limit)?
        }
    }

    Ok(())
}
