//! Command runner for p4sweep.
//!
//! Wraps external command execution behind a trait so the dispatcher and
//! orchestration can be tested with a recording fake instead of spawning
//! real processes. The real implementation passes commands through the
//! host shell and captures both output streams in full.

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Result, SweepError};

/// Captured result of a completed command execution.
///
/// A non-zero exit code is a normal, reportable outcome, not a runner
/// error; only failure to spawn the process at all surfaces as `Err`.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code of the process (-1 if terminated without one).
    pub exit_code: i32,
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl CommandOutput {
    /// Returns true if the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes one external command and captures its outcome.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` through the host shell, blocking this task until the
    /// process terminates with both streams fully captured.
    async fn run(&self, command: &str) -> Result<CommandOutput>;
}

/// The real runner: spawns `sh -c` (or `cmd /c` on Windows).
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<CommandOutput> {
        let output = shell_command(command).output().await.map_err(|e| {
            SweepError::Runner(format!("failed to spawn '{}': {}", command, e))
        })?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/c", command]);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_stdout() {
        let output = ShellRunner.run("echo hello").await.unwrap();

        assert!(output.success());
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stdout, "hello");
        assert!(output.stderr.is_empty());
    }

    #[tokio::test]
    async fn captures_stderr_and_exit_code() {
        #[cfg(unix)]
        let command = "echo oops >&2; exit 3";
        #[cfg(windows)]
        let command = "echo oops 1>&2 & exit /b 3";

        let output = ShellRunner.run(command).await.unwrap();

        assert!(!output.success());
        assert_eq!(output.exit_code, 3);
        assert!(output.stderr.contains("oops"));
    }

    /// A missing program is a shell-level failure (127), not a runner
    /// error: the shell itself spawned fine.
    #[cfg(unix)]
    #[tokio::test]
    async fn missing_program_is_a_normal_nonzero_exit() {
        let output = ShellRunner
            .run("definitely_not_a_real_command_xyz")
            .await
            .unwrap();

        assert!(!output.success());
        assert_eq!(output.exit_code, 127);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn output_is_trimmed() {
        let output = ShellRunner.run("echo '  padded  '").await.unwrap();

        assert_eq!(output.stdout, "padded");
    }
}
