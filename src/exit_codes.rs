//! Exit code constants for the p4sweep CLI.
//!
//! - 0: Success (including runs where individual reverts failed)
//! - 1: User error (report file missing or unreadable)
//! - 2: Usage error (bad or missing arguments, emitted by clap)
//! - 3: Runner failure (external process could not be spawned)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: report file missing or unreadable.
pub const USER_ERROR: i32 = 1;

/// Usage error: bad or missing arguments. clap emits this code itself;
/// listed here so the full code space is documented in one place.
#[allow(dead_code)]
pub const USAGE_ERROR: i32 = 2;

/// Runner failure: the external tool could not be started at all, or a
/// dispatch worker panicked.
pub const RUNNER_FAILURE: i32 = 3;
