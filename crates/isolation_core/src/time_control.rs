//! Move clocks.
//!
//! Searches never own a timer. They query an injected [`Clock`] for the time
//! remaining in the current turn and compare it against their own threshold.

use std::time::{Duration, Instant};

/// Source of the time remaining for the current move.
pub trait Clock {
    /// Time left before the move must be returned.
    fn time_left(&self) -> Duration;
}

impl<F> Clock for F
where
    F: Fn() -> Duration,
{
    fn time_left(&self) -> Duration {
        self()
    }
}

/// Wall-clock budget for a single move.
///
/// Created fresh for every move by the match runner. A `None` limit never
/// runs out.
#[derive(Debug, Clone)]
pub struct TimeControl {
    /// Start time of the move
    start_time: Instant,
    /// Time limit for this move (None = infinite)
    time_limit: Option<Duration>,
}

impl TimeControl {
    /// Create a new time controller. The clock starts immediately.
    ///
    /// # Arguments
    /// * `time_limit` - Maximum time allowed for the move (None = infinite)
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            start_time: Instant::now(),
            time_limit,
        }
    }

    /// Get elapsed time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }

    /// True once the full budget has been used.
    pub fn is_expired(&self) -> bool {
        match self.time_limit {
            Some(limit) => self.elapsed() >= limit,
            None => false,
        }
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Clock for TimeControl {
    fn time_left(&self) -> Duration {
        self.remaining().unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
