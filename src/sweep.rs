//! Implementation of the sweep run.
//!
//! Orchestrates one pass: validate the report file, run the `<tool> set`
//! preflight, parse the describe output, log per-file change counts,
//! select the unchanged files, and dispatch the reverts. The runner is
//! injected so tests can drive the full flow with a recording fake.

use std::fs;
use std::sync::Arc;

use crate::cli::Cli;
use crate::diag::Logger;
use crate::dispatch;
use crate::error::{Result, SweepError};
use crate::report;
use crate::runner::{CommandOutput, CommandRunner, ShellRunner};

/// Execute the sweep with the real shell runner.
pub async fn cmd_sweep(args: Cli) -> Result<()> {
    let log = Logger::new(args.debug);
    run_sweep(args, Arc::new(ShellRunner), log).await
}

/// Execute the sweep with the given runner.
///
/// A preflight spawn failure aborts before any reverts; individual revert
/// failures are logged and never affect the process exit code.
pub async fn run_sweep(args: Cli, runner: Arc<dyn CommandRunner>, log: Logger) -> Result<()> {
    log.info(format!(
        "report: {}, tool: {}, max-parallel: {}, chunk-size: {}, debug: {}",
        args.report.display(),
        args.tool,
        args.max_parallel,
        args.chunk_size,
        args.debug,
    ));

    if !args.report.exists() {
        return Err(SweepError::User(format!(
            "report file '{}' does not exist",
            args.report.display()
        )));
    }

    let text = fs::read_to_string(&args.report).map_err(|e| {
        SweepError::User(format!(
            "failed to read report file '{}': {}",
            args.report.display(),
            e
        ))
    })?;

    // Preflight: surface the tool's environment before touching anything.
    // If even this cannot be spawned, the tool is unusable and the run
    // aborts here, before any reverts.
    let preflight = format!("{} set", args.tool);
    let output = runner.run(&preflight).await?;
    log_command(&log, &preflight, &output);

    let counts = report::parse_describe(&text);
    for (file, count) in &counts {
        log.info(format!("file: {:<128}: {:>5}", file, count));
    }

    let unchanged = report::unchanged_files(&counts);
    if unchanged.is_empty() {
        log.info(format!(
            "{} file(s) in report, none unchanged, nothing to revert",
            counts.len()
        ));
        return Ok(());
    }

    log.info(format!(
        "{} file(s) in report, {} unchanged",
        counts.len(),
        unchanged.len()
    ));

    if args.dry_run {
        for file in &unchanged {
            log.info(format!("would revert: {}", file));
        }
        return Ok(());
    }

    let tool = args.tool.clone();
    let outcomes = dispatch::dispatch(
        unchanged,
        args.max_parallel,
        args.chunk_size,
        runner,
        log,
        move |file| format!("{} revert {}", tool, file),
    )
    .await?;

    let failed = outcomes.iter().filter(|o| !o.success()).count();
    log.info(format!(
        "reverted {} file(s), {} failure(s)",
        outcomes.len() - failed,
        failed
    ));

    Ok(())
}

/// Log a completed command's exit code and captured streams.
fn log_command(log: &Logger, command: &str, output: &CommandOutput) {
    log.info(format!("'{}' exit code: {}", command, output.exit_code));
    if !output.success() && !output.stderr.is_empty() {
        log.info(format!("'{}' stderr: {}", command, output.stderr));
    }
    if !output.stdout.is_empty() {
        log.debug(format!("'{}' output: {}", command, output.stdout));
    }
}
