//! Exit code constants for the tradectl CLI.
//!
//! - 0: Success
//! - 1: User error (bad config, unreadable state, I/O failure)
//! - 2: Launch failure (spawn failed, verification failed, already running)
//! - 3: Not running (no process-id record)
//! - 4: Stale record (process-id record names a dead process)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid configuration, corrupt record, or filesystem failure.
pub const USER_ERROR: i32 = 1;

/// Launch failure: the service could not be spawned or did not stay up.
pub const LAUNCH_FAILURE: i32 = 2;

/// No process-id record exists, so the service is believed to be stopped.
pub const NOT_RUNNING: i32 = 3;

/// The process-id record names a process that no longer exists.
pub const STALE_RECORD: i32 = 4;
