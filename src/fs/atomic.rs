//! Write-then-rename replacement of small state files.
//!
//! Content goes to a sibling temporary file named `.{filename}.{pid}.tmp`,
//! which is fsynced and then renamed over the target. The rename is atomic
//! because both names live in the same directory. A temporary file that never
//! reaches the rename is removed when its guard drops.
//!
//! There is no locking: two concurrent writers both succeed and the last
//! rename wins.

use crate::error::{Result, SupervisorError};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically replace `path` with `content`.
///
/// # Returns
///
/// * `Ok(())` - the target now holds exactly `content`
/// * `Err(SupervisorError::UserError)` - the target is unchanged
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let target = path.as_ref();
    let fail = |action: &str, e: io::Error| {
        SupervisorError::UserError(format!(
            "failed to {} '{}': {}",
            action,
            target.display(),
            e
        ))
    };

    let mut staged = StagedFile::create(target).map_err(|e| fail("stage", e))?;
    staged
        .write_synced(content.as_bytes())
        .map_err(|e| fail("write", e))?;
    staged.commit().map_err(|e| fail("replace", e))
}

/// Temporary sibling of a target file, deleted on drop unless committed.
struct StagedFile<'a> {
    target: &'a Path,
    temp_path: PathBuf,
    file: Option<File>,
}

impl<'a> StagedFile<'a> {
    fn create(target: &'a Path) -> io::Result<Self> {
        let temp_path = temp_path_for(target)?;
        let file = File::create(&temp_path)?;
        Ok(Self {
            target,
            temp_path,
            file: Some(file),
        })
    }

    fn write_synced(&mut self, content: &[u8]) -> io::Result<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::other("staged file already closed"))?;
        file.write_all(content)?;
        file.sync_all()
    }

    fn commit(mut self) -> io::Result<()> {
        // Close before renaming.
        self.file.take();
        fs::rename(&self.temp_path, self.target)?;
        self.temp_path.clear();

        if let Some(dir) = self.target.parent().and_then(|p| File::open(p).ok()) {
            let _ = dir.sync_all();
        }
        Ok(())
    }
}

impl Drop for StagedFile<'_> {
    fn drop(&mut self) {
        if !self.temp_path.as_os_str().is_empty() {
            let _ = fs::remove_file(&self.temp_path);
        }
    }
}

fn temp_path_for(target: &Path) -> io::Result<PathBuf> {
    let name = target.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path has no file name")
    })?;
    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(name);
    temp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(target.with_file_name(temp_name))
}
