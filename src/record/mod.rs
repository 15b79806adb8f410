//! Process-id record store.
//!
//! The record is the handoff token between independent invocations: `start`
//! writes it, `stop` retires it and `status` only reads it. Its on-disk form is
//! a single positive decimal integer followed by a newline.
//!
//! # Consistency
//!
//! There is deliberately no locking. Concurrent invocations may observe each
//! other's intermediate states and the last writer wins. Writes are atomic
//! renames, so a reader never sees a partially written pid.

mod file;
#[cfg(test)]
mod memory;

#[cfg(test)]
mod tests;

pub use file::FileRecordStore;
#[cfg(test)]
pub use memory::MemoryRecordStore;

use crate::error::Result;
use std::path::Path;

/// Read/write/delete access to the persisted process id.
pub trait RecordStore {
    /// Read the recorded pid, or `None` if no record exists.
    fn read(&self) -> Result<Option<u32>>;

    /// Create or overwrite the record.
    fn write(&self, pid: u32) -> Result<()>;

    /// Remove the record. Removing an absent record is not an error.
    fn delete(&self) -> Result<()>;

    /// Where the record lives, for messages.
    fn location(&self) -> &Path;
}

/// Parse record content into a pid.
///
/// Surrounding whitespace is ignored. Returns `None` unless the content is a
/// positive integer that fits a pid.
pub fn parse_pid(content: &str) -> Option<u32> {
    let pid: u32 = content.trim().parse().ok()?;
    // kill(2) treats 0 and values above i32::MAX as process groups or errors.
    if pid == 0 || pid > i32::MAX as u32 {
        return None;
    }
    Some(pid)
}

/// Serialize a pid into record content.
pub fn format_pid(pid: u32) -> String {
    format!("{}\n", pid)
}
