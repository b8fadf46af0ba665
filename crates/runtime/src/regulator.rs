use raven_core::Tick;

/// Limits how often an expensive per-bot update runs.
///
/// A regulator fires at most once every `interval` ticks. Bots get different
/// offsets so their arbitrations are spread over the interval instead of all
/// landing on the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regulator {
    interval: u64,
    next: Tick,
}

impl Regulator {
    pub fn new(interval: u64, offset: u64) -> Self {
        let interval = interval.max(1);
        Self {
            interval,
            next: Tick(offset % interval),
        }
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Returns true if the update is due at `now`, and schedules the next one.
    pub fn is_ready(&mut self, now: Tick) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.interval;
        true
    }

    /// Restarts the schedule so the next update is due `interval` ticks
    /// after `now`.
    pub fn restart(&mut self, now: Tick) {
        self.next = now + self.interval;
    }
}
