//! Sleep abstraction for the supervisor's fixed-cadence polling.

use std::time::Duration;

/// Source of blocking waits.
pub trait Clock {
    fn sleep(&self, duration: Duration);
}

/// Wall-clock implementation backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
