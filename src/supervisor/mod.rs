//! The three supervisor components and the log tail they share.
//!
//! - [`launcher`]: start the service detached and persist its pid
//! - [`terminator`]: graceful stop with escalation to a forceful kill
//! - [`status`]: liveness report for the recorded pid
//!
//! Components never talk to each other. They coordinate only through the
//! process-id record and the log stream, and they reach the OS only through
//! the capability traits bundled in [`Supervisor`].

pub mod launcher;
pub mod logtail;
pub mod status;
pub mod terminator;

use crate::process::{Clock, ProcessTable};
use crate::record::RecordStore;

/// Capabilities shared by every component.
#[derive(Clone, Copy)]
pub struct Supervisor<'a> {
    pub records: &'a dyn RecordStore,
    pub processes: &'a dyn ProcessTable,
    pub clock: &'a dyn Clock,
}

impl<'a> Supervisor<'a> {
    pub fn new(
        records: &'a dyn RecordStore,
        processes: &'a dyn ProcessTable,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            records,
            processes,
            clock,
        }
    }
}
