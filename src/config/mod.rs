//! Configuration model for tradectl.
//!
//! This module defines the Config struct that represents `tradectl.yaml` in the
//! supervisor's base directory. The file is optional: when it is absent every
//! setting takes its default. Parsing is forward-compatible (unknown fields
//! are ignored) and values are validated after loading.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
