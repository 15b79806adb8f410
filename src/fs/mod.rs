//! Filesystem utilities for tradectl.
//!
//! The process-id record is the only handle the supervisor has on the running
//! service, so it is always replaced atomically: readers see either the old
//! value or the new one, never a truncated file.

pub mod atomic;

pub use atomic::atomic_write_file;
