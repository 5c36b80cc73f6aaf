//! # Finding Taxonomy
//!
//! Every defect the validator can detect, modeled as data. A finding is
//! never thrown: validation of untrusted content must never abort the
//! batch, so even the most broken record yields a report describing
//! precisely what is wrong with it.
//!
//! Each finding kind has a stable code for tooling and a severity.
//! Warning-level findings surface in reports but do not flip a record's
//! validity; error-level findings do.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// The specific way an `options` sequence is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum OptionsDefect {
    /// The `options` value is not a sequence at all.
    NotASequence,
    /// Fewer than two entries; a question with one choice is no question.
    TooFew { count: usize },
    /// An entry is not a string.
    NonStringEntry { index: usize },
    /// An entry is an empty or whitespace-only string.
    EmptyEntry { index: usize },
    /// The same string appears more than once within one question.
    DuplicateEntry { value: String },
}

impl fmt::Display for OptionsDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotASequence => write!(f, "options is not a sequence"),
            Self::TooFew { count } => {
                write!(f, "options has {count} entries; at least 2 are required")
            }
            Self::NonStringEntry { index } => {
                write!(f, "options[{index}] is not a string")
            }
            Self::EmptyEntry { index } => {
                write!(f, "options[{index}] is empty")
            }
            Self::DuplicateEntry { value } => {
                write!(f, "options contains {value:?} more than once")
            }
        }
    }
}

/// A single validation finding for one record.
///
/// `DuplicateId` is the one corpus-level kind: it is attached by the corpus
/// pass to every record sharing the identifier, so an author who fixes only
/// the first copy still sees the problem on the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// A required field is absent, null, or not a usable non-empty value.
    MissingField { field: String },
    /// The `options` sequence violates its shape invariants.
    MalformedOptions { defect: OptionsDefect },
    /// The stated answer equals no element of `options`. A question whose
    /// correct answer cannot be matched to its own choices is unusable no
    /// matter how complete it otherwise looks.
    AnswerNotInOptions { answer: String },
    /// The difficulty label is outside the known vocabulary.
    UnknownDifficulty { value: String },
    /// The identifier is shared with other records at the given zero-based
    /// positions (all occurrences, including this one).
    DuplicateId { id: String, positions: Vec<usize> },
}

impl Finding {
    /// Stable machine-readable code for this finding kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "E-MISSING-FIELD",
            Self::MalformedOptions { .. } => "E-OPTIONS",
            Self::AnswerNotInOptions { .. } => "E-ANSWER",
            Self::UnknownDifficulty { .. } => "W-DIFFICULTY",
            Self::DuplicateId { .. } => "E-DUP-ID",
        }
    }

    /// Severity of this finding kind.
    ///
    /// Only `UnknownDifficulty` is a warning: the difficulty vocabulary is
    /// advisory and may extend, so an unexpected label should not condemn
    /// an otherwise well-formed record.
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnknownDifficulty { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// True if this finding flips a record's validity.
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => {
                write!(f, "required field {field:?} is missing or empty")
            }
            Self::MalformedOptions { defect } => write!(f, "{defect}"),
            Self::AnswerNotInOptions { answer } => {
                write!(f, "answer {answer:?} does not match any option")
            }
            Self::UnknownDifficulty { value } => {
                write!(f, "difficulty {value:?} is not in the known set")
            }
            Self::DuplicateId { id, positions } => {
                write!(f, "id {id:?} is shared by records at positions {positions:?}")
            }
        }
    }
}
