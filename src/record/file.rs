//! File-backed record store.

use super::{RecordStore, format_pid, parse_pid};
use crate::error::{Result, SupervisorError};
use crate::fs::atomic_write_file;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Record store backed by a plain-text pid file.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    /// Create a store for the pid file at `path`. The file need not exist.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordStore for FileRecordStore {
    fn read(&self) -> Result<Option<u32>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SupervisorError::UserError(format!(
                    "failed to read pid file '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        parse_pid(&content)
            .map(Some)
            .ok_or_else(|| SupervisorError::CorruptRecord {
                path: self.path.clone(),
                content: content.trim().to_string(),
            })
    }

    fn write(&self, pid: u32) -> Result<()> {
        atomic_write_file(&self.path, &format_pid(pid))
    }

    fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SupervisorError::UserError(format!(
                "failed to remove pid file '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
