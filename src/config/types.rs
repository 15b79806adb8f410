//! Default value functions used by the Config struct.

/// Default service command line (the trading agent's entry point).
pub fn default_command() -> String {
    "python3 main.py".to_string()
}

/// Default settle time before verifying a freshly launched service.
pub fn default_verify_delay_ms() -> u64 {
    1000
}

/// Default number of log lines shown by `status`.
pub fn default_status_tail_lines() -> usize {
    20
}

/// Default number of log lines shown after a successful `stop`.
pub fn default_stop_tail_lines() -> usize {
    10
}
