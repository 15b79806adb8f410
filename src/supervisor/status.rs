//! StatusReporter: read-only liveness check of the recorded service.
//!
//! Never modifies the record. A stale record is reported, not cleaned up, so
//! repeated status checks are idempotent.

use super::Supervisor;
use crate::error::{Result, SupervisorError};

/// Pid of the running service.
///
/// # Errors
///
/// * `MissingRecord` - no record exists
/// * `StaleRecord` - the recorded process is gone (record left in place)
pub fn running_pid(sv: &Supervisor<'_>) -> Result<u32> {
    let pid = sv
        .records
        .read()?
        .ok_or_else(|| SupervisorError::MissingRecord {
            path: sv.records.location().to_path_buf(),
        })?;

    if sv.processes.is_alive(pid) {
        Ok(pid)
    } else {
        Err(SupervisorError::StaleRecord { pid })
    }
}
