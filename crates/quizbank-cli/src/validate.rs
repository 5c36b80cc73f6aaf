//! # Validate Subcommand
//!
//! Validates one or more corpus files and renders the report. Files are
//! concatenated before the corpus pass so id uniqueness holds across the
//! whole bank, not merely within one file. Exit-code policy: the handler
//! returns whether the run passed; any error-severity finding fails the
//! run, and `--strict` extends that to warnings.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};

use quizbank_validate::{load_records, validate_corpus, CorpusReport};

/// Output format for the validation report.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable findings listing with a summary block.
    Text,
    /// The serialized corpus report, for tooling.
    Json,
}

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Corpus files to validate (JSON or YAML arrays of records).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,

    /// Report output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Run the validation; returns `true` iff the corpus passed.
pub fn run(args: &ValidateArgs) -> anyhow::Result<bool> {
    let mut records = Vec::new();
    for file in &args.files {
        let mut loaded = load_records(file)
            .with_context(|| format!("loading corpus file {}", file.display()))?;
        tracing::info!(file = %file.display(), records = loaded.len(), "loaded");
        records.append(&mut loaded);
    }

    let report = validate_corpus(&records);
    let passed = report.valid && (!args.strict || report.warning_count() == 0);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => render_text(&report),
    }

    Ok(passed)
}

/// Human-readable rendering: findings per defective record, then a summary.
fn render_text(report: &CorpusReport) {
    for record in &report.records {
        if record.findings.is_empty() {
            continue;
        }
        println!("{}:", record.label());
        for finding in &record.findings {
            println!("  [{}] {finding}", finding.code());
        }
    }

    println!(
        "\n=== Corpus Validation Results ===\n\
         Total:    {}\n\
         Passed:   {}\n\
         Failed:   {}\n\
         Warnings: {}",
        report.records.len(),
        report.valid_records().len(),
        report.invalid_records().len(),
        report.warning_count(),
    );
}
