//! Supervisor context resolution for tradectl.
//!
//! Every invocation (start, stop, status) is an independent short-lived run
//! that coordinates with the others only through files in the supervisor's
//! base directory. This module is the single place those well-known paths are
//! derived, so all commands agree on where the shared state lives.

use crate::error::{Result, SupervisorError};
use std::env;
use std::path::{Path, PathBuf};

/// File name of the process-id record.
pub const PID_FILE: &str = "trade.pid";

/// File name of the service's log stream.
pub const LOG_FILE: &str = "trade.log";

/// File name of the optional service configuration.
pub const CONFIG_FILE: &str = "tradectl.yaml";

/// Resolved paths for the supervisor.
///
/// All paths are absolute.
#[derive(Debug, Clone)]
pub struct SupervisorContext {
    /// Base directory holding the shared state (the invocation's working directory).
    pub base_dir: PathBuf,

    /// Absolute path to the process-id record (`{base_dir}/trade.pid`).
    pub pid_path: PathBuf,

    /// Absolute path to the log stream (`{base_dir}/trade.log`).
    pub log_path: PathBuf,

    /// Absolute path to the configuration file (`{base_dir}/tradectl.yaml`).
    pub config_path: PathBuf,
}

impl SupervisorContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(SupervisorContext)` - Successfully resolved context
    /// * `Err(SupervisorError::UserError)` - If the working directory is unavailable
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            SupervisorError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(cwd))
    }

    /// Resolve the context rooted at a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(base_dir: P) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();

        Self {
            pid_path: base_dir.join(PID_FILE),
            log_path: base_dir.join(LOG_FILE),
            config_path: base_dir.join(CONFIG_FILE),
            base_dir,
        }
    }

    /// Resolve a possibly relative path against the base directory.
    pub fn resolve_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
