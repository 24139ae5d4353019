use std::time::{Duration, Instant};

/// Fixed-interval clock for generations.
///
/// At most one tick is reported per poll; a frame that arrives late does not
/// trigger a burst of catch-up steps.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Starts counting a fresh interval from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.last = now;
    }

    pub fn until_next(&self, now: Instant) -> Duration {
        (self.last + self.interval).saturating_duration_since(now)
    }

    /// Returns true if a tick boundary has passed since the last tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.last + self.interval {
            return false;
        }
        self.last += self.interval;
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
        }
        true
    }
}
