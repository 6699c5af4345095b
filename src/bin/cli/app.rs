use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use quizdrill_lib::progress::ProgressStore;
use quizdrill_lib::questions::{Question, QuestionBank};
use quizdrill_lib::storage::SqliteBackend;

/// Shared application state for CLI commands
pub struct App {
    pub bank: QuestionBank,
    pub store: ProgressStore<SqliteBackend>,
}

impl App {
    /// Initialize from the data directory, wiring the question bank and
    /// the SQLite-backed progress store
    pub fn new(data_dir: Option<&Path>, questions: Option<&Path>) -> Result<Self> {
        let data_dir: PathBuf = match data_dir {
            Some(path) => path.to_path_buf(),
            None => SqliteBackend::default_data_dir().context("Failed to get data directory")?,
        };

        let questions_path = questions
            .map(Path::to_path_buf)
            .unwrap_or_else(|| data_dir.join("questions.json"));
        let bank = QuestionBank::load(&questions_path).with_context(|| {
            format!(
                "Failed to load question bank from {}",
                questions_path.display()
            )
        })?;

        let backend = SqliteBackend::new(&data_dir.join("progress.db"))
            .context("Failed to open progress database")?;

        Ok(Self {
            bank,
            store: ProgressStore::new(backend),
        })
    }

    /// Look up a question, failing with the list of known ids' range
    pub fn find_question(&self, question_id: i64) -> Result<&Question> {
        match self.bank.get(question_id) {
            Some(question) => Ok(question),
            None => bail!(
                "No question with id {} ({} questions in bank)",
                question_id,
                self.bank.len()
            ),
        }
    }
}
