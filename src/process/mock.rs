//! Scripted stand-ins for the clock and the OS, for deterministic tests.
//!
//! `FakeClock` advances simulated time instead of sleeping. `FakeSystem`
//! implements both `ProcessTable` and `Spawner` over a set of scripted
//! processes whose liveness is evaluated against the fake clock.

use super::{Clock, LaunchSpec, ProcessTable, Spawner, TerminationSignal};
use crate::error::{Result, SignalFailure, SupervisorError};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// Clock that records sleeps and advances a shared simulated time.
#[derive(Debug, Default)]
pub struct FakeClock {
    now: Rc<Cell<Duration>>,
    sleeps: RefCell<Vec<Duration>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle on simulated time.
    pub fn handle(&self) -> Rc<Cell<Duration>> {
        Rc::clone(&self.now)
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }

    pub fn sleep_count(&self) -> usize {
        self.sleeps.borrow().len()
    }
}

impl Clock for FakeClock {
    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
        self.now.set(self.now.get() + duration);
    }
}

/// How a scripted process reacts over its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Runs until signalled; exits this long after receiving SIGTERM.
    ExitsOnTerm(Duration),
    /// Runs until SIGKILL.
    IgnoresTerm,
    /// Exits on its own this long after being spawned.
    CrashesAfter(Duration),
}

#[derive(Debug)]
struct FakeProcess {
    behavior: Behavior,
    exit_at: Option<Duration>,
    killed: bool,
}

impl FakeProcess {
    fn alive_at(&self, now: Duration) -> bool {
        !self.killed && self.exit_at.is_none_or(|at| now < at)
    }
}

/// Scripted process table and spawner.
#[derive(Debug)]
pub struct FakeSystem {
    now: Rc<Cell<Duration>>,
    processes: RefCell<BTreeMap<u32, FakeProcess>>,
    signals: RefCell<Vec<(u32, TerminationSignal, Duration)>>,
    failing_signals: RefCell<Vec<TerminationSignal>>,
    next_pid: Cell<u32>,
    next_behavior: Cell<Behavior>,
    spawn_error: RefCell<Option<String>>,
    spawned: RefCell<Vec<LaunchSpec>>,
}

impl FakeSystem {
    pub fn new(clock: &FakeClock) -> Self {
        Self {
            now: clock.handle(),
            processes: RefCell::new(BTreeMap::new()),
            signals: RefCell::new(Vec::new()),
            failing_signals: RefCell::new(Vec::new()),
            next_pid: Cell::new(4000),
            next_behavior: Cell::new(Behavior::ExitsOnTerm(Duration::ZERO)),
            spawn_error: RefCell::new(None),
            spawned: RefCell::new(Vec::new()),
        }
    }

    /// Add a running process that was not started through `spawn`.
    pub fn insert(&self, pid: u32, behavior: Behavior) {
        let exit_at = match behavior {
            Behavior::CrashesAfter(after) => Some(self.now.get() + after),
            _ => None,
        };
        self.processes.borrow_mut().insert(
            pid,
            FakeProcess {
                behavior,
                exit_at,
                killed: false,
            },
        );
    }

    /// Make a process disappear without any signal (external kill, crash, reboot).
    pub fn vanish(&self, pid: u32) {
        self.processes.borrow_mut().remove(&pid);
    }

    /// Pid and behavior for the next `spawn` call.
    pub fn on_next_spawn(&self, pid: u32, behavior: Behavior) {
        self.next_pid.set(pid);
        self.next_behavior.set(behavior);
    }

    /// Make every subsequent `spawn` fail.
    pub fn fail_spawns(&self, reason: &str) {
        *self.spawn_error.borrow_mut() = Some(reason.to_string());
    }

    /// Make delivery of `signal` fail (the signal has no effect).
    pub fn fail_signal(&self, signal: TerminationSignal) {
        self.failing_signals.borrow_mut().push(signal);
    }

    /// Every signal delivery attempt, in order.
    pub fn signals(&self) -> Vec<(u32, TerminationSignal)> {
        self.signals
            .borrow()
            .iter()
            .map(|(pid, signal, _)| (*pid, *signal))
            .collect()
    }

    pub fn count_signals(&self, signal: TerminationSignal) -> usize {
        self.signal_times(signal).len()
    }

    /// Simulated times at which `signal` was sent.
    pub fn signal_times(&self, signal: TerminationSignal) -> Vec<Duration> {
        self.signals
            .borrow()
            .iter()
            .filter(|(_, s, _)| *s == signal)
            .map(|(_, _, at)| *at)
            .collect()
    }

    pub fn spawned(&self) -> Vec<LaunchSpec> {
        self.spawned.borrow().clone()
    }
}

impl ProcessTable for FakeSystem {
    fn is_alive(&self, pid: u32) -> bool {
        let now = self.now.get();
        self.processes
            .borrow()
            .get(&pid)
            .is_some_and(|p| p.alive_at(now))
    }

    fn signal(&self, pid: u32, signal: TerminationSignal) -> std::result::Result<(), SignalFailure> {
        self.signals
            .borrow_mut()
            .push((pid, signal, self.now.get()));

        let failure = |reason: &str| SignalFailure {
            pid,
            signal: signal.as_str(),
            reason: reason.to_string(),
        };

        if self.failing_signals.borrow().contains(&signal) {
            return Err(failure("EPERM: Operation not permitted"));
        }

        let now = self.now.get();
        let mut processes = self.processes.borrow_mut();
        let process = match processes.get_mut(&pid) {
            Some(p) if p.alive_at(now) => p,
            _ => return Err(failure("ESRCH: No such process")),
        };

        match (signal, process.behavior) {
            (TerminationSignal::Forceful, _) => process.killed = true,
            (TerminationSignal::Graceful, Behavior::ExitsOnTerm(after)) => {
                let at = now + after;
                process.exit_at = Some(process.exit_at.map_or(at, |prev| prev.min(at)));
            }
            (TerminationSignal::Graceful, _) => {}
        }
        Ok(())
    }
}

impl Spawner for FakeSystem {
    fn spawn(&self, spec: &LaunchSpec) -> Result<u32> {
        if let Some(reason) = self.spawn_error.borrow().as_ref() {
            return Err(SupervisorError::SpawnFailure(reason.clone()));
        }

        self.spawned.borrow_mut().push(spec.clone());
        let pid = self.next_pid.get();
        self.insert(pid, self.next_behavior.get());
        self.next_pid.set(pid + 1);
        Ok(pid)
    }
}
