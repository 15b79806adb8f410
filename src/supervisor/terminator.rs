//! Terminator: graceful stop with a bounded grace period, then a forceful kill.
//!
//! ```text
//! CheckRecord --absent--> NotRunning
//!      |
//!   present
//!      v
//! CheckAlive --gone--> Stale (record removed)
//!      |
//!    alive
//!      v
//! SignalTerm --> WaitLoop --gone--> Terminated (record removed)
//!                   |
//!             budget exhausted
//!                   v
//!               Escalate --> Terminated
//! ```
//!
//! The wait loop checks liveness, then sleeps one `POLL_INTERVAL` while budget
//! remains. A process that ignores SIGTERM therefore gets exactly
//! `GRACE_POLLS` intervals before the single SIGKILL.

use super::Supervisor;
use crate::error::{Result, SupervisorError};
use crate::process::TerminationSignal;
use std::time::Duration;
use tracing::{debug, warn};

/// Number of poll intervals a process gets to exit after SIGTERM.
pub const GRACE_POLLS: u32 = 30;

/// Cadence of the liveness poll during the grace period.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// States of a stop run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopState {
    CheckRecord,
    CheckAlive { pid: u32 },
    SignalTerm { pid: u32 },
    WaitLoop { pid: u32, remaining: u32 },
    Escalate { pid: u32 },
    Terminated { pid: u32, escalated: bool },
    NotRunning,
    Stale { pid: u32 },
}

impl StopState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StopState::Terminated { .. } | StopState::NotRunning | StopState::Stale { .. }
        )
    }
}

/// Outcome of a successful stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopReport {
    /// Pid of the terminated service.
    pub pid: u32,
    /// Whether SIGKILL was needed.
    pub escalated: bool,
    /// Time spent in the grace period.
    pub waited: Duration,
}

/// Drives one stop run through the state machine.
pub struct Terminator<'a> {
    sv: Supervisor<'a>,
    waited: Duration,
}

impl<'a> Terminator<'a> {
    pub fn new(sv: Supervisor<'a>) -> Self {
        Self {
            sv,
            waited: Duration::ZERO,
        }
    }

    /// Run from `CheckRecord` to a terminal state.
    ///
    /// # Errors
    ///
    /// * `MissingRecord` - no record; no signal is sent
    /// * `StaleRecord` - the recorded process is gone; the record is removed
    pub fn run(mut self) -> Result<StopReport> {
        let mut state = StopState::CheckRecord;
        while !state.is_terminal() {
            let next = self.step(state)?;
            debug!(?state, ?next, "stop transition");
            state = next;
        }
        self.finish(state)
    }

    /// Advance one non-terminal state.
    pub fn step(&mut self, state: StopState) -> Result<StopState> {
        let next = match state {
            StopState::CheckRecord => match self.sv.records.read()? {
                None => StopState::NotRunning,
                Some(pid) => StopState::CheckAlive { pid },
            },
            StopState::CheckAlive { pid } => {
                if self.sv.processes.is_alive(pid) {
                    StopState::SignalTerm { pid }
                } else {
                    StopState::Stale { pid }
                }
            }
            StopState::SignalTerm { pid } => {
                self.send(pid, TerminationSignal::Graceful);
                StopState::WaitLoop {
                    pid,
                    remaining: GRACE_POLLS,
                }
            }
            StopState::WaitLoop { pid, remaining } => {
                if !self.sv.processes.is_alive(pid) {
                    StopState::Terminated {
                        pid,
                        escalated: false,
                    }
                } else if remaining == 0 {
                    StopState::Escalate { pid }
                } else {
                    self.sv.clock.sleep(POLL_INTERVAL);
                    self.waited += POLL_INTERVAL;
                    StopState::WaitLoop {
                        pid,
                        remaining: remaining - 1,
                    }
                }
            }
            StopState::Escalate { pid } => {
                warn!(pid, "service ignored SIGTERM for {:?}, sending SIGKILL", self.waited);
                self.send(pid, TerminationSignal::Forceful);
                if self.sv.processes.is_alive(pid) {
                    warn!(pid, "service still present right after SIGKILL");
                }
                StopState::Terminated {
                    pid,
                    escalated: true,
                }
            }
            terminal => terminal,
        };
        Ok(next)
    }

    fn send(&self, pid: u32, signal: TerminationSignal) {
        if let Err(e) = self.sv.processes.signal(pid, signal) {
            warn!("{}; continuing", e);
        }
    }

    fn finish(self, state: StopState) -> Result<StopReport> {
        match state {
            StopState::Terminated { pid, escalated } => {
                self.sv.records.delete()?;
                Ok(StopReport {
                    pid,
                    escalated,
                    waited: self.waited,
                })
            }
            StopState::Stale { pid } => {
                self.sv.records.delete()?;
                debug!(pid, "removed stale pid file");
                Err(SupervisorError::StaleRecord { pid })
            }
            StopState::NotRunning => Err(SupervisorError::MissingRecord {
                path: self.sv.records.location().to_path_buf(),
            }),
            other => Err(SupervisorError::UserError(format!(
                "stop ended in non-terminal state {:?}",
                other
            ))),
        }
    }
}

/// Stop the recorded service.
pub fn terminate(sv: Supervisor<'_>) -> Result<StopReport> {
    Terminator::new(sv).run()
}
