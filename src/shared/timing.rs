//! Timing utilities for request measurements.
//!
//! Every execution is measured end to end, from just before dispatch until
//! the outcome settles, whatever that outcome is.

use std::time::{Duration, Instant};

/// Monotonic wall-clock measurement of a single execution.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Starts a new stopwatch at the current instant.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time elapsed since `start`.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Whole milliseconds elapsed since `start`.
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}
