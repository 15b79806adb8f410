//! Launcher: start the service detached, persist its pid, verify it came up.

use super::Supervisor;
use crate::config::Config;
use crate::context::SupervisorContext;
use crate::error::{Result, SupervisorError};
use crate::process::{LaunchSpec, Spawner, TerminationSignal};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Outcome of a verified launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    /// Pid of the new service process.
    pub pid: u32,
    /// Pid from a stale record that was overwritten, if any.
    pub replaced_stale: Option<u32>,
}

/// Build the launch spec from the configuration and well-known paths.
pub fn launch_spec(config: &Config, ctx: &SupervisorContext) -> Result<LaunchSpec> {
    let mut argv = config.command_argv()?.into_iter();
    let program = argv.next().ok_or_else(|| {
        SupervisorError::UserError("service command is empty".to_string())
    })?;

    let working_dir = match &config.working_dir {
        Some(dir) => ctx.resolve_path(dir),
        None => ctx.base_dir.clone(),
    };

    Ok(LaunchSpec {
        program,
        args: argv.collect(),
        working_dir,
        environment: config.environment.clone(),
        log_path: ctx.log_path.clone(),
    })
}

/// Start the service and verify it is alive after `verify_delay`.
///
/// The record is overwritten with the new pid before verification. If the
/// process is gone by then, the record is removed again and the launch is
/// reported as a `VerificationFailure`.
///
/// # Errors
///
/// * `AlreadyRunning` - the record names a live process; nothing is spawned
/// * `SpawnFailure` - the OS rejected process creation; the record is untouched
/// * `UserError` - the pid could not be recorded; the new process is killed
/// * `VerificationFailure` - the process exited before verification
pub fn launch(
    sv: &Supervisor<'_>,
    spawner: &dyn Spawner,
    spec: &LaunchSpec,
    verify_delay: Duration,
) -> Result<LaunchReport> {
    let previous = match sv.records.read() {
        Ok(previous) => previous,
        Err(SupervisorError::CorruptRecord { path, content }) => {
            warn!(path = %path.display(), %content, "overwriting corrupt pid file");
            None
        }
        Err(e) => return Err(e),
    };

    if let Some(pid) = previous {
        if sv.processes.is_alive(pid) {
            return Err(SupervisorError::AlreadyRunning { pid });
        }
        debug!(pid, "pid file is stale, replacing it");
    }

    debug!(command = %spec.display_command(), dir = %spec.working_dir.display(), "spawning service");
    let pid = spawner.spawn(spec)?;

    if let Err(e) = sv.records.write(pid) {
        // An unrecorded service is unreachable by stop and status.
        if let Err(kill_err) = sv.processes.signal(pid, TerminationSignal::Forceful) {
            warn!("{}; service may still be running", kill_err);
        }
        return Err(SupervisorError::UserError(format!(
            "service started (pid {}) but its pid could not be recorded, so it was killed: {}",
            pid, e
        )));
    }
    info!(pid, "service spawned");

    sv.clock.sleep(verify_delay);

    if !sv.processes.is_alive(pid) {
        sv.records.delete()?;
        debug!(pid, "removed pid file of service that failed verification");
        return Err(SupervisorError::VerificationFailure { pid });
    }

    Ok(LaunchReport {
        pid,
        replaced_stale: previous,
    })
}
