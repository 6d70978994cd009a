//! Bounded-concurrency batch command dispatcher.
//!
//! Takes the set of files to revert, partitions it into contiguous chunks,
//! and runs one command per file with a global concurrency ceiling. One
//! worker task per chunk iterates its files sequentially; before each
//! command the worker acquires a permit from a shared semaphore and holds
//! it until the command completes, so no more than `ceiling` external
//! processes are ever in flight at once. The outer call returns only after
//! every worker has drained its chunk.
//!
//! Jobs are independent: no result of one job aborts, skips, or retries
//! another. A command the runner could not spawn at all is recorded in that
//! job's outcome and the worker moves on.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::diag::Logger;
use crate::error::{Result, SweepError};
use crate::runner::CommandRunner;

/// Default concurrency ceiling: at most this many commands in flight.
pub const DEFAULT_MAX_PARALLEL: usize = 50;

/// Default partition size: files per worker task.
pub const DEFAULT_CHUNK_SIZE: usize = 20;

/// Terminal outcome of one revert job.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    /// The file the job reverted.
    pub file: String,
    /// Exit code of the command, or the spawn failure message.
    pub status: JobStatus,
}

/// How a job's command finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// The command ran to completion with this exit code.
    Exited(i32),
    /// The runner could not start the command at all.
    SpawnFailed(String),
}

impl JobOutcome {
    /// Returns true if the command ran and exited with code 0.
    pub fn success(&self) -> bool {
        self.status == JobStatus::Exited(0)
    }
}

/// Run one command per file with at most `ceiling` concurrent executions.
///
/// `template` maps a file identifier to the command line to run for it.
/// `ceiling` and `chunk_size` are clamped to at least 1. Returns the
/// per-job outcomes (in no particular order) once every job has completed;
/// outcomes are for logging and testing only, never for control decisions.
pub async fn dispatch<F>(
    files: Vec<String>,
    ceiling: usize,
    chunk_size: usize,
    runner: Arc<dyn CommandRunner>,
    log: Logger,
    template: F,
) -> Result<Vec<JobOutcome>>
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    let semaphore = Arc::new(Semaphore::new(ceiling.max(1)));
    let template = Arc::new(template);
    let mut workers = JoinSet::new();

    for chunk in files.chunks(chunk_size.max(1)) {
        let chunk: Vec<String> = chunk.to_vec();
        let semaphore = Arc::clone(&semaphore);
        let runner = Arc::clone(&runner);
        let template = Arc::clone(&template);

        workers.spawn(async move {
            let mut outcomes = Vec::with_capacity(chunk.len());
            for file in chunk {
                // The semaphore is never closed, so acquisition can only
                // fail on a programming error.
                let permit = Arc::clone(&semaphore)
                    .acquire_owned()
                    .await
                    .expect("revert semaphore closed");

                let command = (*template)(&file);
                let status = run_one(&*runner, &command, &file, log).await;
                drop(permit);

                outcomes.push(JobOutcome { file, status });
            }
            outcomes
        });
    }

    let mut all = Vec::with_capacity(files.len());
    while let Some(joined) = workers.join_next().await {
        let outcomes = joined
            .map_err(|e| SweepError::Runner(format!("revert worker panicked: {}", e)))?;
        all.extend(outcomes);
    }

    Ok(all)
}

/// Execute a single job's command and log its outcome. The permit is held
/// by the caller for the full duration of this call.
async fn run_one(
    runner: &dyn CommandRunner,
    command: &str,
    file: &str,
    log: Logger,
) -> JobStatus {
    log.info(format!("file did not change, reverting: {}", file));
    log.debug(format!("running: {}", command));

    match runner.run(command).await {
        Ok(output) => {
            log.info(format!("'{}' exit code: {}", command, output.exit_code));
            if !output.success() && !output.stderr.is_empty() {
                log.info(format!("'{}' stderr: {}", command, output.stderr));
            }
            if !output.stdout.is_empty() {
                log.debug(format!("'{}' output: {}", command, output.stdout));
            }
            JobStatus::Exited(output.exit_code)
        }
        Err(e) => {
            log.info(format!("'{}' could not be started: {}", command, e));
            JobStatus::SpawnFailed(e.to_string())
        }
    }
}
