// src/crawl/deadline.rs
// =============================================================================
// The time budget for a crawl.
//
// The engine asks "has the budget run out?" once after each processed page.
// It never interrupts a fetch that is already running, so one slow page can
// overrun the budget; the guarantee is only that no further page is started.
//
// Time comes from a Clock so tests can control it instead of sleeping.
// =============================================================================

use std::time::{Duration, Instant};

/// A source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time from the operating system's monotonic clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn new(start: Instant, budget: Duration) -> Self {
        Self { start, budget }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    /// Time left before the budget is used up (zero once expired).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.budget.saturating_sub(self.elapsed(now))
    }

    /// True once the elapsed time has reached the budget.
    /// A zero budget is therefore expired from the very first check.
    pub fn expired(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_expired_within_budget() {
        let start = Instant::now();
        let deadline = Deadline::new(start, Duration::from_secs(10));
        let now = start + Duration::from_secs(3);

        assert!(!deadline.expired(now));
        assert_eq!(deadline.remaining(now), Duration::from_secs(7));
    }

    #[test]
    fn test_expired_at_and_after_budget() {
        let start = Instant::now();
        let deadline = Deadline::new(start, Duration::from_secs(10));

        assert!(deadline.expired(start + Duration::from_secs(10)));
        assert!(deadline.expired(start + Duration::from_secs(11)));
        assert_eq!(deadline.remaining(start + Duration::from_secs(11)), Duration::ZERO);
    }

    #[test]
    fn test_zero_budget_expires_immediately() {
        let start = Instant::now();
        let deadline = Deadline::new(start, Duration::ZERO);
        assert!(deadline.expired(start));
    }

    #[test]
    fn test_clock_before_start_counts_as_no_time() {
        let start = Instant::now() + Duration::from_secs(5);
        let deadline = Deadline::new(start, Duration::from_secs(1));
        assert_eq!(deadline.elapsed(Instant::now()), Duration::ZERO);
    }
}
