// src/scheduler.rs
use std::time::{Duration, Instant};

/// Decides how many chart ticks are due each time the UI loop comes around.
pub trait TickScheduler {
    fn poll(&mut self, now: Instant) -> u32;
    fn interval(&self) -> Duration;
}

/// Fixed-period ticks measured against a monotonic clock.
pub struct FixedIntervalScheduler {
    interval: Duration,
    max_catch_up: u32,
    last: Option<Instant>,
}

impl FixedIntervalScheduler {
    pub const DEFAULT_MAX_CATCH_UP: u32 = 8;

    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            max_catch_up: Self::DEFAULT_MAX_CATCH_UP,
            last: None,
        }
    }

    #[cfg(test)]
    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }
}

impl TickScheduler for FixedIntervalScheduler {
    fn poll(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last else {
            self.last = Some(now);
            return 0;
        };
        let elapsed = now.saturating_duration_since(last);
        let whole = (elapsed.as_nanos() / self.interval.as_nanos()) as u64;
        if whole == 0 {
            return 0;
        }
        if whole > self.max_catch_up as u64 {
            // Stalled frame: drop the backlog instead of bursting.
            self.last = Some(now);
            return self.max_catch_up;
        }
        self.last = Some(last + self.interval * whole as u32);
        whole as u32
    }

    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test scheduler; ticks are queued by hand.
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    pending: u32,
    interval: Duration,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            pending: 0,
            interval,
        }
    }

    pub fn queue(&mut self, ticks: u32) {
        self.pending += ticks;
    }
}

#[cfg(test)]
impl TickScheduler for ManualScheduler {
    fn poll(&mut self, _now: Instant) -> u32 {
        std::mem::take(&mut self.pending)
    }

    fn interval(&self) -> Duration {
        self.interval
    }
}
