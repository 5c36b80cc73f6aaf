//! # Stats Subcommand
//!
//! Summarizes a corpus by category and difficulty. Only records that pass
//! validation are counted; defective records are reported as a skipped
//! total so the numbers always describe usable content.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use quizbank_validate::{extract_valid_questions, load_records, validate_corpus};

/// Arguments for the stats subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Corpus files to summarize (JSON or YAML arrays of records).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Print category and difficulty counts for the valid portion of the corpus.
pub fn run(args: &StatsArgs) -> anyhow::Result<()> {
    let mut records = Vec::new();
    for file in &args.files {
        let mut loaded = load_records(file)
            .with_context(|| format!("loading corpus file {}", file.display()))?;
        records.append(&mut loaded);
    }

    let report = validate_corpus(&records);
    let questions = extract_valid_questions(&records, &report);
    let skipped = records.len() - questions.len();

    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_difficulty: BTreeMap<&str, usize> = BTreeMap::new();
    for q in &questions {
        *by_category.entry(q.category.as_str()).or_insert(0) += 1;
        *by_difficulty.entry(q.difficulty.as_str()).or_insert(0) += 1;
    }

    println!("=== Corpus Statistics ===");
    println!("Questions: {} ({} skipped as invalid)", questions.len(), skipped);
    println!("\nBy category:");
    for (category, count) in &by_category {
        println!("  {category:<24} {count}");
    }
    println!("\nBy difficulty:");
    for (difficulty, count) in &by_difficulty {
        println!("  {difficulty:<24} {count}");
    }

    if skipped > 0 {
        tracing::warn!(skipped, "corpus contains invalid records; run `quizbank validate`");
    }

    Ok(())
}
