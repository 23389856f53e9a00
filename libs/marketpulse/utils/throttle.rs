//! Fetch throttling for the periodic refresh loop

use std::time::{Duration, Instant};

/// Gates the expensive fetch pass behind a coarse interval.
///
/// The UI loop ticks tens of times per second; quotes only need refreshing
/// every minute or so. Callers pass `now` in so the gate is deterministic
/// under test.
#[derive(Debug)]
pub struct FetchThrottle {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl FetchThrottle {
    /// Create a throttle that is immediately due (first tick fetches)
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    /// Check if enough time has passed since the last fire
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) => now.duration_since(last) >= self.interval,
            None => true,
        }
    }

    /// Record a fire at `now`.
    ///
    /// Marked when the fetch starts, not when it succeeds: a failing
    /// provider is retried on the next interval, not on every tick.
    pub fn mark(&mut self, now: Instant) {
        self.last_fired = Some(now);
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
