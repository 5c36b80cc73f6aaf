//! # quizbank-cli — Command Handlers
//!
//! One module per subcommand. The binary in `main.rs` parses arguments and
//! dispatches here; handlers return whether the run passed so the binary
//! owns the exit-code policy.

pub mod stats;
pub mod validate;
