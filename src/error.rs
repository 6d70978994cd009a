//! Error types for the p4sweep CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Per-command revert failures are *not* errors: a non-zero exit
//! from the external tool is a normal, logged outcome.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for p4sweep operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum SweepError {
    /// User provided a report path that does not exist or cannot be read.
    #[error("{0}")]
    User(String),

    /// An external process could not be spawned at all (missing shell,
    /// permission denied), or a dispatch worker panicked.
    #[error("Runner failure: {0}")]
    Runner(String),
}

impl SweepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::User(_) => exit_codes::USER_ERROR,
            SweepError::Runner(_) => exit_codes::RUNNER_FAILURE,
        }
    }
}

/// Result type alias for p4sweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = SweepError::User("report file 'x' does not exist".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn runner_error_has_correct_exit_code() {
        let err = SweepError::Runner("failed to spawn shell".to_string());
        assert_eq!(err.exit_code(), exit_codes::RUNNER_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SweepError::User("report file 'missing.txt' does not exist".to_string());
        assert_eq!(err.to_string(), "report file 'missing.txt' does not exist");

        let err = SweepError::Runner("failed to spawn 'p4 set'".to_string());
        assert_eq!(err.to_string(), "Runner failure: failed to spawn 'p4 set'");
    }
}
