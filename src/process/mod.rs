//! Operating-system process capabilities.
//!
//! The supervisor sees the service only as a pid: it can ask whether the pid
//! is in the process table, deliver termination signals to it, and spawn a new
//! detached service. Each capability is a trait so the launcher and terminator
//! can run against scripted fakes in tests.

mod clock;
#[cfg(test)]
pub mod mock;
mod unix;

pub use clock::{Clock, SystemClock};
pub use unix::{DetachedSpawner, SystemProcessTable};

use crate::error::{Result, SignalFailure};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// The two signals the terminator escalates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    /// Ask the process to shut down cleanly (SIGTERM).
    Graceful,
    /// End the process unconditionally (SIGKILL).
    Forceful,
}

impl TerminationSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationSignal::Graceful => "SIGTERM",
            TerminationSignal::Forceful => "SIGKILL",
        }
    }
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Liveness checks and signal delivery.
pub trait ProcessTable {
    /// Whether a process with this pid currently exists.
    fn is_alive(&self, pid: u32) -> bool;

    /// Deliver a termination signal.
    fn signal(&self, pid: u32, signal: TerminationSignal) -> std::result::Result<(), SignalFailure>;
}

/// Everything needed to start the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    /// Executable to run (resolved through `PATH` when not a path).
    pub program: String,
    /// Arguments after the program.
    pub args: Vec<String>,
    /// Working directory of the service.
    pub working_dir: PathBuf,
    /// Extra environment variables, on top of the supervisor's environment.
    pub environment: BTreeMap<String, String>,
    /// Log stream receiving the service's stdout and stderr.
    pub log_path: PathBuf,
}

impl LaunchSpec {
    /// The command line as a single display string.
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Starts the service so that it outlives the invoking session.
pub trait Spawner {
    /// Spawn the service and return its pid.
    ///
    /// Fails with `SupervisorError::SpawnFailure` when the OS rejects process creation.
    fn spawn(&self, spec: &LaunchSpec) -> Result<u32>;
}
