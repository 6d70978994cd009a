//! Timestamped diagnostic logging.
//!
//! Every significant action (change counts, revert decisions, command exit
//! codes and output) goes through here as `{utc-timestamp}: {message}`
//! lines on stdout. Logging is a side effect only and is never consulted
//! for control decisions, so interleaving across concurrent workers is
//! acceptable.

use chrono::Utc;

/// Diagnostic logger carrying the verbosity flag.
///
/// Cheap to copy so workers can carry their own handle across task
/// boundaries without shared state.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Log a line unconditionally.
    pub fn info(&self, msg: impl AsRef<str>) {
        println!("{}: {}", timestamp(), msg.as_ref());
    }

    /// Log a line only when `--debug` was given.
    pub fn debug(&self, msg: impl AsRef<str>) {
        if self.verbose {
            self.info(msg);
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

fn timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let ts = timestamp();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2026-01-02T03:04:05.678Z".len());
        // Round-trips through chrono's RFC3339 parser.
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn logger_carries_verbosity() {
        assert!(Logger::new(true).is_verbose());
        assert!(!Logger::new(false).is_verbose());
    }
}
