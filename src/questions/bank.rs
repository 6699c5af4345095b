//! Question bank loading
//!
//! The bank is a JSON array of question objects, loaded once and held
//! in memory. Ids must be unique; everything else is opaque payload
//! for presentation.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::info;
use thiserror::Error;

use super::models::Question;

#[derive(Error, Debug)]
pub enum QuestionBankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate question id: {0}")]
    DuplicateId(i64),
}

pub type Result<T> = std::result::Result<T, QuestionBankError>;

pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load the bank from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let questions: Vec<Question> = serde_json::from_str(&content)?;
        let bank = Self::from_questions(questions)?;
        info!("loaded {} questions from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// Build a bank from an already-parsed list, rejecting duplicate ids
    pub fn from_questions(questions: Vec<Question>) -> Result<Self> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(QuestionBankError::DuplicateId(question.id));
            }
        }
        Ok(Self { questions })
    }

    /// All questions in bank-file order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id
    pub fn get(&self, id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
