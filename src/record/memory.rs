//! In-memory record store used to exercise the supervisor without touching disk.

use super::RecordStore;
use crate::error::{Result, SupervisorError};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// Record store holding the pid in memory, with a log of every mutation.
#[derive(Debug)]
pub struct MemoryRecordStore {
    pid: Cell<Option<u32>>,
    writes: RefCell<Vec<u32>>,
    deletes: Cell<u32>,
    write_error: RefCell<Option<String>>,
    location: PathBuf,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            pid: Cell::new(None),
            writes: RefCell::new(Vec::new()),
            deletes: Cell::new(0),
            write_error: RefCell::new(None),
            location: PathBuf::from("<memory>/trade.pid"),
        }
    }

    /// A store that already holds `pid`.
    pub fn with_pid(pid: u32) -> Self {
        let store = Self::new();
        store.pid.set(Some(pid));
        store
    }

    /// Current value without going through the trait.
    pub fn current(&self) -> Option<u32> {
        self.pid.get()
    }

    /// Every pid written, in order.
    pub fn writes(&self) -> Vec<u32> {
        self.writes.borrow().clone()
    }

    /// Make every subsequent `write` fail with `reason`.
    pub fn fail_writes(&self, reason: &str) {
        *self.write_error.borrow_mut() = Some(reason.to_string());
    }

    /// Number of delete calls.
    pub fn deletes(&self) -> u32 {
        self.deletes.get()
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryRecordStore {
    fn read(&self) -> Result<Option<u32>> {
        Ok(self.pid.get())
    }

    fn write(&self, pid: u32) -> Result<()> {
        if let Some(reason) = self.write_error.borrow().as_ref() {
            return Err(SupervisorError::UserError(reason.clone()));
        }
        self.pid.set(Some(pid));
        self.writes.borrow_mut().push(pid);
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        self.pid.set(None);
        self.deletes.set(self.deletes.get() + 1);
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.location
    }
}
