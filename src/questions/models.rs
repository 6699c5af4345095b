//! Question bank entities
//!
//! Questions are read-only payload supplied by the bank file; the
//! scheduling engine only ever looks at `id`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    /// Prompt text
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_images: Option<Vec<String>>,
}
