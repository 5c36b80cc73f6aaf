//! # Validation Reports
//!
//! Aggregated results of a validation pass. Reports carry every finding
//! for every record; partial validity is per-record, never a single
//! pass/fail for the whole batch.

use serde::{Deserialize, Serialize};

use crate::finding::{Finding, Severity};

/// The validation result for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordReport {
    /// Zero-based position of the record in the input sequence.
    pub position: usize,
    /// The record's id, if it carried a usable one.
    pub id: Option<String>,
    /// True iff the record carries no error-severity findings.
    pub valid: bool,
    /// All findings for this record, in detection order.
    pub findings: Vec<Finding>,
}

impl RecordReport {
    /// Build a report, computing validity from the findings.
    pub fn new(position: usize, id: Option<String>, findings: Vec<Finding>) -> Self {
        let valid = !findings.iter().any(Finding::is_error);
        Self { position, id, valid, findings }
    }

    /// Human-readable label: the id, or `#<position>` when the record has
    /// no usable id of its own.
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("#{}", self.position),
        }
    }

    /// Only the error-level findings.
    pub fn errors(&self) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Error)
            .collect()
    }

    /// Only the warning-level findings.
    pub fn warnings(&self) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Warning)
            .collect()
    }
}

/// One group of records sharing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// The shared identifier.
    pub id: String,
    /// Zero-based positions of every record carrying it.
    pub positions: Vec<usize>,
}

/// The validation result for a whole corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusReport {
    /// True iff every record is individually valid and no ids are shared.
    pub valid: bool,
    /// Per-record results, in input order.
    pub records: Vec<RecordReport>,
    /// Every identifier shared by more than one record.
    pub duplicates: Vec<DuplicateGroup>,
}

impl CorpusReport {
    /// Build a report, computing the aggregate flag from the records.
    ///
    /// Duplicate-id findings are already attached to the affected records,
    /// so `valid` reduces to "every record is valid".
    pub fn new(records: Vec<RecordReport>, duplicates: Vec<DuplicateGroup>) -> Self {
        let valid = records.iter().all(|r| r.valid);
        Self { valid, records, duplicates }
    }

    /// Total error-level findings across all records.
    pub fn error_count(&self) -> usize {
        self.records.iter().map(|r| r.errors().len()).sum()
    }

    /// Total warning-level findings across all records.
    pub fn warning_count(&self) -> usize {
        self.records.iter().map(|r| r.warnings().len()).sum()
    }

    /// The records that passed every hard check.
    pub fn valid_records(&self) -> Vec<&RecordReport> {
        self.records.iter().filter(|r| r.valid).collect()
    }

    /// The records carrying at least one error.
    pub fn invalid_records(&self) -> Vec<&RecordReport> {
        self.records.iter().filter(|r| !r.valid).collect()
    }
}
