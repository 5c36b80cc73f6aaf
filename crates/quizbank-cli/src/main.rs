//! # quizbank CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// quizbank — question bank integrity toolchain.
///
/// Validates corpus files against the canonical question schema and the
/// bank-wide uniqueness invariants, and summarizes validated content.
#[derive(Parser, Debug)]
#[command(name = "quizbank", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate corpus files; exits non-zero on any hard finding.
    Validate(quizbank_cli::validate::ValidateArgs),
    /// Category and difficulty counts for validated content.
    Stats(quizbank_cli::stats::StatsArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => {
            let passed = quizbank_cli::validate::run(&args)?;
            if !passed {
                std::process::exit(1);
            }
        }
        Commands::Stats(args) => {
            quizbank_cli::stats::run(&args)?;
        }
    }

    Ok(())
}
