//! Unix implementations of the process capabilities, built on `nix`.

use super::{LaunchSpec, ProcessTable, Spawner, TerminationSignal};
use crate::error::{Result, SignalFailure, SupervisorError};
use nix::errno::Errno;
use nix::sys::signal::{Signal, kill};
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::{Pid, setsid};
use std::fs::OpenOptions;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

/// Process table of the running system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessTable;

impl ProcessTable for SystemProcessTable {
    fn is_alive(&self, pid: u32) -> bool {
        let pid = Pid::from_raw(pid as i32);

        // If the service is our own child (start in the same process), an exited
        // child lingers as a zombie until reaped, and kill(pid, 0) still succeeds
        // for zombies. Reap it first so it counts as gone.
        match waitpid(pid, Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::Exited(..)) | Ok(WaitStatus::Signaled(..)) => return false,
            Ok(_) => return true,
            Err(_) => {}
        }

        match kill(pid, None) {
            Ok(()) => !is_zombie(pid),
            // The process exists but belongs to someone else.
            Err(Errno::EPERM) => true,
            Err(_) => false,
        }
    }

    fn signal(&self, pid: u32, signal: TerminationSignal) -> std::result::Result<(), SignalFailure> {
        let sig = match signal {
            TerminationSignal::Graceful => Signal::SIGTERM,
            TerminationSignal::Forceful => Signal::SIGKILL,
        };

        kill(Pid::from_raw(pid as i32), sig).map_err(|errno| SignalFailure {
            pid,
            signal: signal.as_str(),
            reason: errno.to_string(),
        })
    }
}

/// A zombie has exited but has not been reaped by its parent.
#[cfg(target_os = "linux")]
fn is_zombie(pid: Pid) -> bool {
    let Ok(stat) = std::fs::read_to_string(format!("/proc/{}/stat", pid)) else {
        return false;
    };
    // Format: "pid (comm) S ...". comm may itself contain ')' so split on the last one.
    stat.rsplit_once(')')
        .and_then(|(_, rest)| rest.trim_start().chars().next())
        .is_some_and(|state| state == 'Z')
}

#[cfg(not(target_os = "linux"))]
fn is_zombie(_pid: Pid) -> bool {
    false
}

/// Spawns the service in a new session with output appended to the log stream.
///
/// The child calls `setsid()` before exec, so it has no controlling terminal
/// and is not affected when the invoking shell exits. Stdin is `/dev/null`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedSpawner;

impl Spawner for DetachedSpawner {
    fn spawn(&self, spec: &LaunchSpec) -> Result<u32> {
        let stdout_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&spec.log_path)
            .map_err(|e| {
                SupervisorError::SpawnFailure(format!(
                    "failed to open log file '{}': {}",
                    spec.log_path.display(),
                    e
                ))
            })?;

        let stderr_file = stdout_file.try_clone().map_err(|e| {
            SupervisorError::SpawnFailure(format!(
                "failed to duplicate log file handle '{}': {}",
                spec.log_path.display(),
                e
            ))
        })?;

        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .current_dir(&spec.working_dir)
            .envs(&spec.environment)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout_file))
            .stderr(Stdio::from(stderr_file));

        // SAFETY: setsid is async-signal-safe and the closure allocates nothing.
        unsafe {
            command.pre_exec(|| {
                setsid()?;
                Ok(())
            });
        }

        // Dropping the Child neither kills nor waits for it.
        let child = command.spawn().map_err(|e| {
            SupervisorError::SpawnFailure(format!(
                "'{}': {}\nFix: ensure the command is installed and in PATH.",
                spec.program, e
            ))
        })?;

        Ok(child.id())
    }
}
