//! # Difficulty Vocabulary — Advisory Closed Set
//!
//! Defines the `Difficulty` enum with the three known levels. This is the
//! ONE definition used across the workspace; every `match` on `Difficulty`
//! is exhaustive, so adding a level forces every consumer to handle it at
//! compile time.
//!
//! The vocabulary is advisory: raw corpus records carry difficulty as a
//! string, and a value outside this set is a warning-level finding in the
//! validator, not a hard failure. The set may grow as the bank evolves.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Known difficulty levels for a question.
///
/// Serialized in lowercase to match the corpus field format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Recall-level questions most players answer correctly.
    Easy,
    /// Questions requiring familiarity with the category.
    Medium,
    /// Questions only well-read players answer correctly.
    Hard,
}

/// Total number of known difficulty levels. Used for compile-time assertions.
pub const KNOWN_DIFFICULTY_COUNT: usize = 3;

impl Difficulty {
    /// Returns all known levels in ascending order of difficulty.
    pub fn all() -> &'static [Difficulty] {
        &[Self::Easy, Self::Medium, Self::Hard]
    }

    /// Returns the lowercase string identifier for this level.
    ///
    /// This must match the serde serialization format and the string values
    /// stored in the corpus files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Membership test against the known vocabulary.
    ///
    /// Case-sensitive by design: `"Easy"` is not a known difficulty, and the
    /// validator should say so rather than silently folding case.
    pub fn is_known(value: &str) -> bool {
        Self::all().iter().any(|d| d.as_str() == value)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    /// Parse a difficulty from its lowercase string identifier.
    ///
    /// Accepts the same identifiers produced by [`Difficulty::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(CoreError::UnknownDifficulty(other.to_string())),
        }
    }
}
