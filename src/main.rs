//! p4sweep: revert files opened for edit but left unchanged in a Perforce
//! changelist.
//!
//! This is the main entry point for the `p4sweep` CLI. It parses
//! arguments, runs the sweep, and handles errors with proper exit codes.

mod cli;
mod diag;
mod dispatch;
mod error;
mod exit_codes;
mod report;
mod runner;
mod sweep;

use cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match sweep::cmd_sweep(cli).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
