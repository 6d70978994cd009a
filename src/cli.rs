//! CLI argument parsing for p4sweep.
//!
//! Uses clap derive macros for declarative argument definitions. The tool
//! has a single operation, so there are no subcommands: one required
//! positional report path plus tuning flags.

use clap::Parser;
use std::path::PathBuf;

use crate::dispatch::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_PARALLEL};

/// Revert files opened for edit but left unchanged in a Perforce changelist.
///
/// Reads the saved output of `p4 describe -S -dw <changelist>` (a shelf
/// diff with whitespace and line endings ignored), counts the effective
/// changed lines per file, and runs `p4 revert` for every file whose diff
/// is empty. Reverts run concurrently under a global ceiling.
#[derive(Parser, Debug)]
#[command(name = "p4sweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a file containing the output of `p4 describe -S -dw <changelist>`.
    pub report: PathBuf,

    /// Enable verbose diagnostics (full captured output per command).
    #[arg(short, long)]
    pub debug: bool,

    /// Version-control tool executable to invoke.
    #[arg(long, default_value = "p4")]
    pub tool: String,

    /// Maximum number of revert commands in flight at once.
    #[arg(long, default_value_t = DEFAULT_MAX_PARALLEL)]
    pub max_parallel: usize,

    /// Number of files per worker partition (scheduling granularity only).
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Report what would be reverted without invoking the tool.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
