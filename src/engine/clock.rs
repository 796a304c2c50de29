use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::TimeMs;

/// Source of timestamps for fabricated and user records.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> TimeMs;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeMs {
        TimeMs::now()
    }
}

/// Manually driven clock for deterministic tests.
#[derive(Debug, Default)]
pub struct FixedClock {
    ms: AtomicI64,
}

impl FixedClock {
    pub fn new(start: TimeMs) -> Self {
        Self {
            ms: AtomicI64::new(start.as_ms()),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.ms.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, at: TimeMs) {
        self.ms.store(at.as_ms(), Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> TimeMs {
        TimeMs::new(self.ms.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::new(TimeMs::new(1000));
        assert_eq!(clock.now(), TimeMs::new(1000));
        clock.advance(500);
        assert_eq!(clock.now(), TimeMs::new(1500));
        clock.set(TimeMs::new(10));
        assert_eq!(clock.now(), TimeMs::new(10));
    }
}
