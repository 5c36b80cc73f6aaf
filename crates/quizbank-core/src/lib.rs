//! # quizbank-core — Foundational Types for the Question Bank
//!
//! This crate is the bedrock of the quizbank workspace. It defines the
//! canonical shape of one trivia question and the schema metadata the
//! validator uses to produce field-named diagnostics. Every other crate in
//! the workspace depends on `quizbank-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrapper for the question identifier.** `QuestionId` is a
//!    validated newtype, not a bare string. Uniqueness across the corpus is
//!    a corpus-level invariant enforced by the validator, but non-emptiness
//!    is enforced at construction.
//!
//! 2. **`Difficulty` is advisory, not a closed door.** The enum covers the
//!    known vocabulary (`easy`, `medium`, `hard`); unrecognized values are
//!    representable as plain strings in raw records and surface as warnings
//!    downstream, never as parse failures.
//!
//! 3. **Schema metadata lives here.** The ordered required-field list is the
//!    single source of truth for what a well-formed record contains, so
//!    error messages can name the exact missing field.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `quizbank-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod difficulty;
pub mod error;
pub mod question;
pub mod schema;

// Re-export primary types for ergonomic imports.
pub use difficulty::{Difficulty, KNOWN_DIFFICULTY_COUNT};
pub use error::CoreError;
pub use question::{Question, QuestionId};
pub use schema::{
    required_fields, FIELD_ANSWER, FIELD_CATEGORY, FIELD_DIFFICULTY, FIELD_ID, FIELD_OPTIONS,
    FIELD_PROMPT,
};
