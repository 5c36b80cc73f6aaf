//! # quizbank-validate — Corpus Integrity Checking
//!
//! Batch validation of the question bank. Given a sequence of raw records
//! (arbitrary JSON mappings), the validator checks each record against the
//! canonical schema and the whole sequence against the corpus-wide
//! invariants, and returns a structured report with every finding.
//!
//! ## Contract
//!
//! - [`validate::validate_record`] — pure per-record checks; all findings,
//!   not just the first.
//! - [`validate::validate_corpus`] — the per-record pass plus the global
//!   id-uniqueness invariant; duplicate findings land on every copy.
//! - [`load::load_records`] — the external-collaborator seam: materializes
//!   a record sequence from a JSON or YAML file.
//!
//! ## Crate Policy
//!
//! - Content defects are data ([`finding::Finding`]), never errors and
//!   never panics. Real errors exist only at the loading boundary.
//! - Validation is deterministic, order-independent modulo position
//!   labels, and idempotent. There is no hidden state.
//! - Depends only on `quizbank-core` internally.

pub mod finding;
pub mod load;
pub mod report;
pub mod validate;

pub use finding::{Finding, OptionsDefect, Severity};
pub use load::{load_records, LoadError};
pub use report::{CorpusReport, DuplicateGroup, RecordReport};
pub use validate::{extract_valid_questions, validate_corpus, validate_record};
