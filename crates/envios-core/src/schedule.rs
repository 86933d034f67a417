//! # Dispatch Schedule Evaluation
//!
//! Evaluates the time-dependent gates: the priority service window, the
//! holiday calendar, and the year-end blackout.
//!
//! ## Gate Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Schedule Gates                                      │
//! │                                                                         │
//! │  BLACKOUT (Dec 27 - Jan 13, recurring)                                 │
//! │  ──────────────────────────────────────                                │
//! │  • Warehouse closed; overrides ALL resolution                          │
//! │  • Checked FIRST in the pipeline, before any other rule                │
//! │                                                                         │
//! │  PRIORITY WINDOW (expedited Bogotá option only)                        │
//! │  ───────────────────────────────────────────────                       │
//! │  • Mon-Fri 06:00-15:00 local                                           │
//! │  • Sat     06:00-11:00 local                                           │
//! │  • Sun     never                                                       │
//! │  • Suspended on configured holidays                                    │
//! │                                                                         │
//! │  All local-time math uses the catalog's fixed UTC offset               │
//! │  (America/Bogota has no DST, so a fixed offset is exact).              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};

use crate::catalog::ScheduleConfig;
use crate::clock::Clock;

// =============================================================================
// Schedule Status
// =============================================================================

/// The schedule gates evaluated at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleStatus {
    /// Year-end blackout active: reject everything.
    pub blackout: bool,

    /// Priority dispatch currently possible (window open, not a holiday,
    /// not blackout).
    pub priority_window_open: bool,
}

// =============================================================================
// Evaluation
// =============================================================================

/// Converts a UTC instant to warehouse local time.
fn to_local(schedule: &ScheduleConfig, now_utc: DateTime<Utc>) -> DateTime<FixedOffset> {
    // Offset validated at startup (-12..=14), so the construction is total
    let offset = FixedOffset::east_opt(schedule.utc_offset_hours * 3600)
        .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset"));
    now_utc.with_timezone(&offset)
}

/// Evaluates both schedule gates at the clock's current instant.
pub fn evaluate(schedule: &ScheduleConfig, clock: &dyn Clock) -> ScheduleStatus {
    let local = to_local(schedule, clock.now_utc());
    let today = local.date_naive();

    let blackout = schedule.blackout.covers(today);
    let holiday = schedule.holidays.contains(&today);

    let window_open = match local.weekday() {
        Weekday::Sat => schedule.saturday.contains(local.hour()),
        Weekday::Sun => false,
        _ => schedule.weekday.contains(local.hour()),
    };

    ScheduleStatus {
        blackout,
        priority_window_open: window_open && !holiday && !blackout,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn schedule() -> ScheduleConfig {
        ScheduleConfig::default()
    }

    /// Bogota local time to UTC: local + 5h.
    fn bogota_clock(year: i32, month: u32, day: u32, local_hour: u32) -> FixedClock {
        let utc_hour = local_hour + 5;
        if utc_hour >= 24 {
            FixedClock::from_ymd_hms(year, month, day + 1, utc_hour - 24, 0, 0)
        } else {
            FixedClock::from_ymd_hms(year, month, day, utc_hour, 0, 0)
        }
    }

    #[test]
    fn test_weekday_window_open() {
        // Tuesday 2025-03-04, 10:00 local
        let status = evaluate(&schedule(), &bogota_clock(2025, 3, 4, 10));
        assert!(!status.blackout);
        assert!(status.priority_window_open);
    }

    #[test]
    fn test_weekday_window_closed_after_cutoff() {
        // Tuesday 15:00 local - window is half-open, 15:00 is outside
        let status = evaluate(&schedule(), &bogota_clock(2025, 3, 4, 15));
        assert!(!status.priority_window_open);
    }

    #[test]
    fn test_weekday_window_closed_before_open() {
        // Tuesday 05:00 local
        let status = evaluate(&schedule(), &bogota_clock(2025, 3, 4, 5));
        assert!(!status.priority_window_open);
    }

    #[test]
    fn test_saturday_short_window() {
        // Saturday 2025-03-08: open at 10:00, closed at 12:00
        assert!(evaluate(&schedule(), &bogota_clock(2025, 3, 8, 10)).priority_window_open);
        assert!(!evaluate(&schedule(), &bogota_clock(2025, 3, 8, 12)).priority_window_open);
    }

    #[test]
    fn test_sunday_always_closed() {
        // Sunday 2025-03-09, 10:00 local
        let status = evaluate(&schedule(), &bogota_clock(2025, 3, 9, 10));
        assert!(!status.priority_window_open);
    }

    #[test]
    fn test_holiday_suspends_priority() {
        // Thursday 2025-05-01 (Labour Day) at 10:00 local
        let status = evaluate(&schedule(), &bogota_clock(2025, 5, 1, 10));
        assert!(!status.blackout);
        assert!(!status.priority_window_open);
    }

    #[test]
    fn test_blackout_active() {
        // Tuesday 2025-12-30, mid-morning
        let status = evaluate(&schedule(), &bogota_clock(2025, 12, 30, 10));
        assert!(status.blackout);
        assert!(!status.priority_window_open);
    }

    #[test]
    fn test_blackout_january_tail() {
        // 2026-01-13 is the last blackout day; 01-14 reopens
        assert!(evaluate(&schedule(), &bogota_clock(2026, 1, 13, 10)).blackout);
        assert!(!evaluate(&schedule(), &bogota_clock(2026, 1, 14, 10)).blackout);
    }

    #[test]
    fn test_timezone_conversion_matters() {
        // Wednesday: 13:00 UTC = 08:00 local (open),
        //            21:00 UTC = 16:00 local (closed)
        let open = FixedClock::from_ymd_hms(2025, 3, 5, 13, 0, 0);
        let closed = FixedClock::from_ymd_hms(2025, 3, 5, 21, 0, 0);
        assert!(evaluate(&schedule(), &open).priority_window_open);
        assert!(!evaluate(&schedule(), &closed).priority_window_open);
    }

    #[test]
    fn test_local_date_shift_across_midnight() {
        // 2026-01-14 03:00 UTC is still 2026-01-13 22:00 in Bogota,
        // so the blackout must still be active
        let clock = FixedClock::from_ymd_hms(2026, 1, 14, 3, 0, 0);
        assert!(evaluate(&schedule(), &clock).blackout);
    }
}
