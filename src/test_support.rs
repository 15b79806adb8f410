//! Shared fixtures for command-level tests.

use crate::context::SupervisorContext;
use std::fs;
use tempfile::TempDir;

/// A throwaway service directory with its resolved context.
pub(crate) struct ServiceDir {
    pub(crate) ctx: SupervisorContext,
    _temp_dir: TempDir,
}

impl ServiceDir {
    pub(crate) fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        Self {
            ctx: SupervisorContext::resolve_from(temp_dir.path()),
            _temp_dir: temp_dir,
        }
    }

    /// Write `tradectl.yaml` with the given content.
    pub(crate) fn write_config(&self, yaml: &str) {
        fs::write(&self.ctx.config_path, yaml).unwrap();
    }

    /// Write the log stream, one entry per line.
    pub(crate) fn write_log(&self, lines: &[&str]) {
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(&self.ctx.log_path, content).unwrap();
    }

    /// Write raw pid file content.
    pub(crate) fn write_pid_file(&self, content: &str) {
        fs::write(&self.ctx.pid_path, content).unwrap();
    }

    pub(crate) fn pid_file(&self) -> Option<String> {
        fs::read_to_string(&self.ctx.pid_path).ok()
    }
}
