//! Time sources for the game loop.
//!
//! The loop never calls `Instant::now` directly so tests can drive it with a
//! deterministic clock.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source that can also block the caller.
pub trait Clock {
    fn now(&self) -> Instant;

    fn sleep(&self, duration: Duration);
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Manually advanced clock. Sleeping advances time instantly.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
    slept: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
            slept: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }

    /// Total time spent in `sleep`.
    pub fn total_slept(&self) -> Duration {
        self.slept.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
        self.slept.set(self.slept.get() + duration);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new();
        let start = clock.now();
        clock.advance(Duration::from_millis(25));
        assert_eq!(clock.now() - start, Duration::from_millis(25));
        assert_eq!(clock.total_slept(), Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_sleep_advances_time() {
        let clock = ManualClock::new();
        let start = clock.now();
        clock.sleep(Duration::from_millis(7));
        clock.sleep(Duration::from_millis(3));
        assert_eq!(clock.now() - start, Duration::from_millis(10));
        assert_eq!(clock.total_slept(), Duration::from_millis(10));
    }
}
