//! # Question Record — Canonical Data Model
//!
//! The canonical shape of one trivia item. Raw corpus records are arbitrary
//! JSON mappings until they pass validation; `Question` is the typed form a
//! caller deserializes into once a record is known to be well-formed.
//!
//! The `id` field uses the `QuestionId` newtype — you cannot pass a category
//! label where an identifier is expected. Identifier uniqueness across the
//! corpus is enforced by the validator, not here.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::error::CoreError;

/// Unique identifier for a question within the bank.
///
/// Conventionally `<CategoryPrefix><NumericSuffix>` (e.g. `BP001`), but the
/// enforced invariants are non-emptiness here and corpus-wide uniqueness in
/// the validator — the format itself is authoring style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    /// Construct an identifier, rejecting empty and whitespace-only strings.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::EmptyQuestionId);
        }
        Ok(Self(id))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One trivia item.
///
/// The source field for the prompt is named `question` in corpus files;
/// the serde rename keeps the wire format stable while the Rust field says
/// what the value is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, e.g. `BP001`.
    pub id: QuestionId,
    /// The question text shown to the player.
    #[serde(rename = "question")]
    pub prompt: String,
    /// Ordered answer choices. At least 2, no duplicates, all non-empty.
    pub options: Vec<String>,
    /// The correct answer; equals exactly one element of `options`,
    /// byte-for-byte.
    pub answer: String,
    /// Topical category label. Open set; new categories may appear.
    pub category: String,
    /// Difficulty as authored. Kept as a string because the vocabulary is
    /// advisory; use [`Question::difficulty_level`] for the typed view.
    pub difficulty: String,
    /// Optional free-text explanation of the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// The zero-based index of the correct answer within `options`, if the
    /// answer matches an option exactly.
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o == &self.answer)
    }

    /// The typed difficulty, if the authored string is in the known set.
    pub fn difficulty_level(&self) -> Option<Difficulty> {
        self.difficulty.parse().ok()
    }
}
