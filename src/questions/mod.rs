//! Question bank: read-only source of quiz questions

pub mod bank;
pub mod models;

pub use bank::{QuestionBank, QuestionBankError};
pub use models::Question;
