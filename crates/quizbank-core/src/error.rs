//! # Error Types
//!
//! Errors raised by the core types themselves. Content defects found while
//! validating a corpus are NOT errors — they are findings returned as data
//! by `quizbank-validate`. The variants here cover genuine faults: values
//! that cannot be constructed at all.

use thiserror::Error;

/// Top-level error type for the quizbank core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A `QuestionId` was constructed from an empty or whitespace-only string.
    #[error("question id must be a non-empty string")]
    EmptyQuestionId,

    /// A string did not name a known difficulty level.
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
