//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, SupervisorError};
use std::path::Path;
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SupervisorError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SupervisorError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            SupervisorError::UserError(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Load config from a YAML file, falling back to defaults when the file does not exist.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            SupervisorError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `command` must parse into at least one word
    /// - `status_tail_lines` and `stop_tail_lines` must be positive
    pub fn validate(&self) -> Result<()> {
        let argv = self.command_argv()?;
        if argv.is_empty() {
            return Err(SupervisorError::UserError(
                "config validation failed: command must not be empty".to_string(),
            ));
        }

        if self.status_tail_lines == 0 {
            return Err(SupervisorError::UserError(
                "config validation failed: status_tail_lines must be greater than 0".to_string(),
            ));
        }

        if self.stop_tail_lines == 0 {
            return Err(SupervisorError::UserError(
                "config validation failed: stop_tail_lines must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Split the service command into program and arguments.
    pub fn command_argv(&self) -> Result<Vec<String>> {
        shell_words::split(&self.command).map_err(|e| {
            SupervisorError::UserError(format!(
                "failed to parse service command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                self.command, e
            ))
        })
    }

    /// Settle time before launch verification.
    pub fn verify_delay(&self) -> Duration {
        Duration::from_millis(self.verify_delay_ms)
    }
}
