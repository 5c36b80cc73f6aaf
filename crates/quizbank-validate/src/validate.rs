//! # Corpus Validation Pass
//!
//! Pure, single-pass validation of raw question records. Records are
//! structurally arbitrary JSON values: fields may be missing, mistyped, or
//! extraneous (extras are ignored, not rejected). The pass never stops at
//! the first defect — an author needs the full list of problems, not one
//! at a time — and it never panics on content.
//!
//! Per-record checks are independent of every other record; the only
//! cross-record computation is the id-uniqueness grouping at the end of
//! [`validate_corpus`].

use std::collections::BTreeMap;

use serde_json::Value;

use quizbank_core::schema::{self, FIELD_ANSWER, FIELD_DIFFICULTY, FIELD_ID, FIELD_OPTIONS};
use quizbank_core::{Difficulty, Question};

use crate::finding::{Finding, OptionsDefect};
use crate::report::{CorpusReport, DuplicateGroup, RecordReport};

/// Returns the field as a usable non-empty string, if it is one.
fn usable_string<'a>(record: &'a Value, field: &str) -> Option<&'a str> {
    record
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Validate a single record against the per-record schema constraints.
///
/// Returns every finding, in detection order: missing required fields
/// first (in canonical field order), then options-shape defects, then the
/// answer-in-options check, then the advisory difficulty check. A missing
/// or non-sequence `options` never cascades into the answer check.
pub fn validate_record(record: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();

    // (a) Required fields present and usable.
    for &field in schema::required_fields() {
        let present = match record.get(field) {
            None | Some(Value::Null) => false,
            // The options shape has its own check below; anything non-null
            // counts as present here.
            Some(_) if field == FIELD_OPTIONS => true,
            Some(value) => value.as_str().is_some_and(|s| !s.trim().is_empty()),
        };
        if !present {
            findings.push(Finding::MissingField { field: field.to_string() });
        }
    }

    // (b) Options shape: sequence, >= 2 entries, all non-empty strings,
    // no duplicates.
    let options = match record.get(FIELD_OPTIONS) {
        None | Some(Value::Null) => None,
        Some(Value::Array(entries)) => {
            if entries.len() < 2 {
                findings.push(Finding::MalformedOptions {
                    defect: OptionsDefect::TooFew { count: entries.len() },
                });
            }
            let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
            for (index, entry) in entries.iter().enumerate() {
                match entry.as_str() {
                    None => findings.push(Finding::MalformedOptions {
                        defect: OptionsDefect::NonStringEntry { index },
                    }),
                    Some(s) if s.trim().is_empty() => {
                        findings.push(Finding::MalformedOptions {
                            defect: OptionsDefect::EmptyEntry { index },
                        });
                    }
                    Some(s) => {
                        let count = seen.entry(s).or_insert(0);
                        *count += 1;
                        // Report each duplicated value once, at its second
                        // occurrence.
                        if *count == 2 {
                            findings.push(Finding::MalformedOptions {
                                defect: OptionsDefect::DuplicateEntry { value: s.to_string() },
                            });
                        }
                    }
                }
            }
            Some(entries)
        }
        Some(_) => {
            findings.push(Finding::MalformedOptions {
                defect: OptionsDefect::NotASequence,
            });
            None
        }
    };

    // (c) Answer must equal exactly one option, byte-for-byte. Only
    // checkable when both sides are actually present.
    if let (Some(answer), Some(entries)) = (usable_string(record, FIELD_ANSWER), options) {
        let matched = entries
            .iter()
            .filter_map(Value::as_str)
            .any(|option| option == answer);
        if !matched {
            findings.push(Finding::AnswerNotInOptions { answer: answer.to_string() });
        }
    }

    // (d) Advisory difficulty vocabulary.
    if let Some(value) = usable_string(record, FIELD_DIFFICULTY) {
        if !Difficulty::is_known(value) {
            findings.push(Finding::UnknownDifficulty { value: value.to_string() });
        }
    }

    findings
}

/// Validate a whole corpus: every per-record check plus the global
/// id-uniqueness invariant.
///
/// For every id appearing more than once, a `DuplicateId` finding is
/// attached to *every* record sharing it, carrying all positions — an
/// author fixing only the first copy still sees the problem on the rest.
/// An empty input is vacuously valid.
pub fn validate_corpus(records: &[Value]) -> CorpusReport {
    let ids: Vec<Option<String>> = records
        .iter()
        .map(|r| usable_string(r, FIELD_ID).map(str::to_string))
        .collect();

    // Group positions by id. BTreeMap keeps the duplicate listing in a
    // deterministic order regardless of input order.
    let mut positions_by_id: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (position, id) in ids.iter().enumerate() {
        if let Some(id) = id {
            positions_by_id.entry(id).or_default().push(position);
        }
    }

    let duplicates: Vec<DuplicateGroup> = positions_by_id
        .iter()
        .filter(|(_, positions)| positions.len() > 1)
        .map(|(id, positions)| DuplicateGroup {
            id: id.to_string(),
            positions: positions.clone(),
        })
        .collect();

    let reports = records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            let mut findings = validate_record(record);
            if let Some(id) = &ids[position] {
                if let Some(group) = duplicates.iter().find(|g| &g.id == id) {
                    findings.push(Finding::DuplicateId {
                        id: group.id.clone(),
                        positions: group.positions.clone(),
                    });
                }
            }
            RecordReport::new(position, ids[position].clone(), findings)
        })
        .collect();

    let report = CorpusReport::new(reports, duplicates);
    tracing::debug!(
        records = records.len(),
        duplicate_groups = report.duplicates.len(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "corpus validation pass complete"
    );
    report
}

/// Project the records that passed every hard check into typed questions.
///
/// This is the "silently skip malformed content" path for a runtime game
/// loader: invalid records are dropped, not reported. Callers wanting the
/// defect list use the report directly.
pub fn extract_valid_questions(records: &[Value], report: &CorpusReport) -> Vec<Question> {
    report
        .valid_records()
        .iter()
        .filter_map(|r| serde_json::from_value(records[r.position].clone()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn well_formed(id: &str) -> Value {
        json!({
            "id": id,
            "question": "Which prophet interpreted Nebuchadnezzar's dream?",
            "options": ["Joseph", "Daniel", "David", "Jeremiah"],
            "answer": "Daniel",
            "category": "Prophets",
            "difficulty": "easy",
            "explanation": "Daniel 2 records the interpretation."
        })
    }

    #[test]
    fn test_well_formed_record_has_no_findings() {
        assert!(validate_record(&well_formed("BP001")).is_empty());
    }

    #[test]
    fn test_each_missing_field_reported_alone() {
        for &field in quizbank_core::required_fields() {
            let mut record = well_formed("BP001");
            record.as_object_mut().unwrap().remove(field);
            let findings = validate_record(&record);
            assert_eq!(
                findings,
                vec![Finding::MissingField { field: field.to_string() }],
                "removing {field:?} should yield exactly one finding"
            );
        }
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let mut record = well_formed("BP001");
        record["answer"] = Value::Null;
        let findings = validate_record(&record);
        assert_eq!(
            findings,
            vec![Finding::MissingField { field: "answer".into() }]
        );
    }

    #[test]
    fn test_empty_string_field_counts_as_missing() {
        let mut record = well_formed("BP001");
        record["category"] = json!("   ");
        let findings = validate_record(&record);
        assert_eq!(
            findings,
            vec![Finding::MissingField { field: "category".into() }]
        );
    }

    #[test]
    fn test_wrong_typed_scalar_counts_as_missing() {
        let mut record = well_formed("BP001");
        record["question"] = json!(42);
        let findings = validate_record(&record);
        assert_eq!(
            findings,
            vec![Finding::MissingField { field: "question".into() }]
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mut record = well_formed("BP001");
        record["author"] = json!("anonymous");
        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn test_non_object_record_reports_every_field() {
        let findings = validate_record(&json!("not a record"));
        assert_eq!(findings.len(), quizbank_core::required_fields().len());
        assert!(findings.iter().all(|f| matches!(f, Finding::MissingField { .. })));
    }

    #[test]
    fn test_options_not_a_sequence() {
        let mut record = well_formed("BP001");
        record["options"] = json!("Daniel");
        let findings = validate_record(&record);
        assert!(findings.contains(&Finding::MalformedOptions {
            defect: OptionsDefect::NotASequence
        }));
        // No cascade into the answer check.
        assert!(!findings
            .iter()
            .any(|f| matches!(f, Finding::AnswerNotInOptions { .. })));
    }

    #[test]
    fn test_options_too_few() {
        let mut record = well_formed("BP001");
        record["options"] = json!(["Daniel"]);
        let findings = validate_record(&record);
        assert!(findings.contains(&Finding::MalformedOptions {
            defect: OptionsDefect::TooFew { count: 1 }
        }));
    }

    #[test]
    fn test_options_empty_entry() {
        let mut record = well_formed("BP001");
        record["options"] = json!(["Joseph", "", "Daniel", "David"]);
        record["answer"] = json!("Daniel");
        let findings = validate_record(&record);
        assert!(findings.contains(&Finding::MalformedOptions {
            defect: OptionsDefect::EmptyEntry { index: 1 }
        }));
    }

    #[test]
    fn test_options_non_string_entry() {
        let mut record = well_formed("BP001");
        record["options"] = json!(["Joseph", 7, "Daniel", "David"]);
        let findings = validate_record(&record);
        assert!(findings.contains(&Finding::MalformedOptions {
            defect: OptionsDefect::NonStringEntry { index: 1 }
        }));
    }

    #[test]
    fn test_options_duplicate_reported_once_per_value() {
        let mut record = well_formed("BP001");
        record["options"] = json!(["X", "X", "X", "Y"]);
        record["answer"] = json!("X");
        let findings = validate_record(&record);
        let duplicate_findings: Vec<_> = findings
            .iter()
            .filter(|f| {
                matches!(
                    f,
                    Finding::MalformedOptions { defect: OptionsDefect::DuplicateEntry { .. } }
                )
            })
            .collect();
        assert_eq!(duplicate_findings.len(), 1);
        // The answer still matches an option; no answer finding.
        assert!(!findings
            .iter()
            .any(|f| matches!(f, Finding::AnswerNotInOptions { .. })));
    }

    #[test]
    fn test_answer_not_in_options() {
        let mut record = well_formed("BP001");
        record["answer"] = json!("Ezekiel");
        let findings = validate_record(&record);
        assert_eq!(
            findings,
            vec![Finding::AnswerNotInOptions { answer: "Ezekiel".into() }]
        );
    }

    #[test]
    fn test_answer_match_is_byte_for_byte() {
        let mut record = well_formed("BP001");
        record["answer"] = json!("daniel");
        let findings = validate_record(&record);
        assert!(findings
            .iter()
            .any(|f| matches!(f, Finding::AnswerNotInOptions { .. })));
    }

    #[test]
    fn test_unknown_difficulty_is_warning_only() {
        let mut record = well_formed("BP001");
        record["difficulty"] = json!("expert");
        let findings = validate_record(&record);
        assert_eq!(
            findings,
            vec![Finding::UnknownDifficulty { value: "expert".into() }]
        );

        let report = validate_corpus(&[record]);
        assert!(report.valid, "a warning alone must not invalidate");
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_missing_explanation_is_fine() {
        let mut record = well_formed("BP001");
        record.as_object_mut().unwrap().remove("explanation");
        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn test_empty_corpus_vacuously_valid() {
        let report = validate_corpus(&[]);
        assert!(report.valid);
        assert!(report.records.is_empty());
        assert!(report.duplicates.is_empty());
    }

    #[test]
    fn test_duplicate_id_lands_on_every_copy() {
        let records = vec![well_formed("BP001"), well_formed("BP002"), well_formed("BP001")];
        let report = validate_corpus(&records);
        assert!(!report.valid);
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].positions, vec![0, 2]);

        let expected = Finding::DuplicateId { id: "BP001".into(), positions: vec![0, 2] };
        assert!(report.records[0].findings.contains(&expected));
        assert!(report.records[2].findings.contains(&expected));
        assert!(report.records[1].valid);
    }

    #[test]
    fn test_records_without_id_never_group_as_duplicates() {
        let mut a = well_formed("BP001");
        a.as_object_mut().unwrap().remove("id");
        let mut b = well_formed("BP002");
        b.as_object_mut().unwrap().remove("id");
        let report = validate_corpus(&[a, b]);
        assert!(report.duplicates.is_empty());
        assert_eq!(report.records[0].label(), "#0");
        assert_eq!(report.records[1].label(), "#1");
    }

    /// The three-record scenario: A valid, B duplicating A's id, C with a
    /// duplicated option entry.
    #[test]
    fn test_mixed_corpus_scenario() {
        let a = well_formed("BP001");
        let b = well_formed("BP001");
        let mut c = well_formed("BP003");
        c["options"] = json!(["X", "X", "Y", "Z"]);
        c["answer"] = json!("X");

        let report = validate_corpus(&[a, b, c]);
        assert!(!report.valid);
        assert_eq!(report.duplicates.len(), 1);

        let dup = Finding::DuplicateId { id: "BP001".into(), positions: vec![0, 1] };
        assert!(report.records[0].findings.contains(&dup));
        assert!(report.records[1].findings.contains(&dup));
        assert_eq!(
            report.records[2].findings,
            vec![Finding::MalformedOptions {
                defect: OptionsDefect::DuplicateEntry { value: "X".into() }
            }]
        );
        assert_eq!(report.error_count(), 3);
    }

    #[test]
    fn test_idempotence() {
        let records = vec![well_formed("BP001"), well_formed("BP001")];
        let first = validate_corpus(&records);
        let second = validate_corpus(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_valid_questions_skips_broken_records() {
        let mut broken = well_formed("BP002");
        broken["answer"] = json!("Ezekiel");
        let records = vec![well_formed("BP001"), broken];
        let report = validate_corpus(&records);
        let questions = extract_valid_questions(&records, &report);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id.as_str(), "BP001");
        assert_eq!(questions[0].answer_index(), Some(1));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// A small pool of records with assorted defects.
        fn record_pool() -> Vec<Value> {
            let mut unknown_difficulty = well_formed("WP001");
            unknown_difficulty["difficulty"] = json!("expert");
            let mut bad_answer = well_formed("NT001");
            bad_answer["answer"] = json!("Nicodemus");
            let mut no_id = well_formed("ignored");
            no_id.as_object_mut().unwrap().remove("id");
            vec![
                well_formed("BP001"),
                well_formed("BP001"),
                well_formed("OT001"),
                unknown_difficulty,
                bad_answer,
                no_id,
            ]
        }

        /// Findings as (id-or-none, finding) pairs, sorted, so shuffled
        /// inputs can be compared modulo position labels.
        fn finding_multiset(report: &CorpusReport) -> Vec<(Option<String>, String)> {
            let mut all: Vec<(Option<String>, String)> = report
                .records
                .iter()
                .flat_map(|r| {
                    r.findings.iter().map(move |f| {
                        // Positions inside DuplicateId vary with order;
                        // compare by code for that kind.
                        let rendered = match f {
                            Finding::DuplicateId { id, .. } => format!("dup:{id}"),
                            other => other.to_string(),
                        };
                        (r.id.clone(), rendered)
                    })
                })
                .collect();
            all.sort();
            all
        }

        proptest! {
            #[test]
            fn shuffling_preserves_findings(order in Just(record_pool()).prop_shuffle()) {
                let baseline = validate_corpus(&record_pool());
                let shuffled = validate_corpus(&order);
                prop_assert_eq!(finding_multiset(&baseline), finding_multiset(&shuffled));
                prop_assert_eq!(baseline.valid, shuffled.valid);
                prop_assert_eq!(baseline.duplicates.len(), shuffled.duplicates.len());
            }

            #[test]
            fn validate_corpus_is_idempotent(order in Just(record_pool()).prop_shuffle()) {
                prop_assert_eq!(validate_corpus(&order), validate_corpus(&order));
            }
        }
    }
}
