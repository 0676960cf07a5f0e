use std::time::{Duration, Instant};

/// Fixed-interval gate for simulation ticks, owned by the frame loop.
///
/// Rendering and input run every frame; the ticker decides which frames also
/// advance the simulation.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    last_fired: Instant,
}

impl Ticker {
    #[must_use]
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_fired: start,
        }
    }

    /// Returns true and restarts the interval when at least one full interval
    /// has elapsed since the last firing.
    pub fn is_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fired) >= self.interval {
            self.last_fired = now;
            return true;
        }
        false
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
