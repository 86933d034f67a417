//! # Clock Abstraction
//!
//! The single point where wall-clock time enters resolution.
//!
//! ## Why Inject the Clock?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Resolution output is time-dependent:                                   │
//! │    • the priority option appears only inside the service window         │
//! │    • the year-end blackout rejects everything                           │
//! │                                                                         │
//! │  Scattered `now()` calls make that untestable. All time flows through  │
//! │  one trait instead:                                                     │
//! │                                                                         │
//! │    production:  SystemClock ──► Utc::now()                              │
//! │    tests:       FixedClock  ──► a pinned instant                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, TimeZone, Utc};

// =============================================================================
// Clock Trait
// =============================================================================

/// Time source for schedule evaluation.
///
/// Implementations return UTC; the schedule converts to warehouse local
/// time using the catalog's fixed offset.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

// =============================================================================
// System Clock
// =============================================================================

/// Production clock backed by the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// =============================================================================
// Fixed Clock
// =============================================================================

/// A clock pinned to one instant. Used by tests and offline tooling to make
/// schedule evaluation deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to the given UTC instant.
    pub fn new(instant: DateTime<Utc>) -> Self {
        FixedClock(instant)
    }

    /// Pins the clock to a UTC calendar time.
    ///
    /// Panics on out-of-range components; acceptable for test fixtures.
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        FixedClock(
            Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
                .single()
                .expect("valid UTC calendar time"),
        )
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_fixed_clock_returns_pinned_instant() {
        let clock = FixedClock::from_ymd_hms(2025, 3, 4, 15, 30, 0);
        assert_eq!(clock.now_utc().hour(), 15);
        assert_eq!(clock.now_utc(), clock.now_utc());
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now_utc();
        let b = clock.now_utc();
        assert!(b >= a);
    }
}
