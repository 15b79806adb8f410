//! Error types for the tradectl CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for supervisor operations.
///
/// Every variant is terminal for the current invocation and maps to an exit code.
#[derive(Error, Debug)]
pub enum SupervisorError {
    /// No process-id record exists where one was expected.
    #[error("service is not running (no pid file at '{}')", path.display())]
    MissingRecord { path: PathBuf },

    /// The process-id record names a process that is no longer in the process table.
    #[error("service is not running (stale pid {pid})")]
    StaleRecord { pid: u32 },

    /// The process-id record could not be parsed as a positive integer.
    #[error("pid file '{}' is corrupt (content: {content:?})\nFix: remove the file and try again.", path.display())]
    CorruptRecord { path: PathBuf, content: String },

    /// The operating system refused to create the service process.
    #[error("failed to spawn service: {0}")]
    SpawnFailure(String),

    /// The service was spawned but was not alive at verification time.
    #[error("service (pid {pid}) exited immediately after launch")]
    VerificationFailure { pid: u32 },

    /// A start was requested while the recorded process is still alive.
    #[error("service is already running (pid {pid})")]
    AlreadyRunning { pid: u32 },

    /// Invalid configuration or a filesystem operation failed.
    #[error("{0}")]
    UserError(String),
}

impl SupervisorError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SupervisorError::MissingRecord { .. } => exit_codes::NOT_RUNNING,
            SupervisorError::StaleRecord { .. } => exit_codes::STALE_RECORD,
            SupervisorError::CorruptRecord { .. } => exit_codes::USER_ERROR,
            SupervisorError::SpawnFailure(_) => exit_codes::LAUNCH_FAILURE,
            SupervisorError::VerificationFailure { .. } => exit_codes::LAUNCH_FAILURE,
            SupervisorError::AlreadyRunning { .. } => exit_codes::LAUNCH_FAILURE,
            SupervisorError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// A termination signal could not be delivered.
///
/// Never terminal: the caller logs it and proceeds to its next state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to send {signal} to pid {pid}: {reason}")]
pub struct SignalFailure {
    pub pid: u32,
    pub signal: &'static str,
    pub reason: String,
}

/// Result type alias for supervisor operations.
pub type Result<T> = std::result::Result<T, SupervisorError>;
