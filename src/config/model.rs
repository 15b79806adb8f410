//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for the supervised service.
///
/// This struct represents the contents of `tradectl.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Service settings
    // =========================================================================
    /// Command line used to launch the service (shell-style quoting).
    #[serde(default = "default_command")]
    pub command: String,

    /// Working directory for the service, relative to the base directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,

    /// Extra environment variables for the service process.
    #[serde(default)]
    pub environment: BTreeMap<String, String>,

    // =========================================================================
    // Supervisor settings
    // =========================================================================
    /// Milliseconds to wait after spawning before checking that the service is alive.
    #[serde(default = "default_verify_delay_ms")]
    pub verify_delay_ms: u64,

    /// Log lines shown by `status` while the service is running.
    #[serde(default = "default_status_tail_lines")]
    pub status_tail_lines: usize,

    /// Log lines shown after `stop` terminates the service.
    #[serde(default = "default_stop_tail_lines")]
    pub stop_tail_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: default_command(),
            working_dir: None,
            environment: BTreeMap::new(),
            verify_delay_ms: default_verify_delay_ms(),
            status_tail_lines: default_status_tail_lines(),
            stop_tail_lines: default_stop_tail_lines(),
        }
    }
}
