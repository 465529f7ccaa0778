//! Clock adapters.
//!
//! - `SystemClock` - wall clock, for production
//! - `ManualClock` - settable clock, for tests and demos

use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock that only moves when told to. Second resolution.
#[derive(Debug, Default)]
pub struct ManualClock {
    unix_secs: AtomicI64,
}

impl ManualClock {
    pub fn at_unix_secs(secs: i64) -> Self {
        Self {
            unix_secs: AtomicI64::new(secs),
        }
    }

    pub fn set_unix_secs(&self, secs: i64) {
        self.unix_secs.store(secs, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.unix_secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_unix_secs(self.unix_secs.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves_only_when_told() {
        let clock = ManualClock::at_unix_secs(500);
        assert_eq!(clock.now().as_unix_secs(), 500);

        clock.advance_secs(500);
        assert_eq!(clock.now().as_unix_secs(), 1000);

        clock.set_unix_secs(10);
        assert_eq!(clock.now().as_unix_secs(), 10);
    }

    #[test]
    fn system_clock_tracks_wall_time() {
        let before = Timestamp::now();
        let now = SystemClock.now();
        assert!(now.is_at_or_after(&before));
    }
}
