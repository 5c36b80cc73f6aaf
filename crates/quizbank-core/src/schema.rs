//! # Record Schema Metadata
//!
//! The single source of truth for what a well-formed raw record contains.
//! The validator walks this list to produce diagnostics that name the exact
//! missing field instead of a generic "invalid object" failure.
//!
//! This module is pure metadata: no state, no failure modes. All failure
//! reporting lives in `quizbank-validate`.

/// Field name of the question identifier.
pub const FIELD_ID: &str = "id";
/// Field name of the prompt text (the corpus files call it `question`).
pub const FIELD_PROMPT: &str = "question";
/// Field name of the answer choices.
pub const FIELD_OPTIONS: &str = "options";
/// Field name of the correct answer.
pub const FIELD_ANSWER: &str = "answer";
/// Field name of the category label.
pub const FIELD_CATEGORY: &str = "category";
/// Field name of the difficulty label.
pub const FIELD_DIFFICULTY: &str = "difficulty";

/// The mandatory fields of a question record, in canonical order.
///
/// `explanation` is deliberately absent: it is documentation, not a
/// semantic constraint, and a record without one is still well-formed.
pub fn required_fields() -> &'static [&'static str] {
    &[
        FIELD_ID,
        FIELD_PROMPT,
        FIELD_OPTIONS,
        FIELD_ANSWER,
        FIELD_CATEGORY,
        FIELD_DIFFICULTY,
    ]
}
