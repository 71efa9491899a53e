//! availability.rs
//!
//! Pure availability logic, independent of storage and HTTP:
//! - Validated query windows (`TimeWindow`).
//! - Whole-hour duration and rental cost for a window.
//! - The conflict predicate between a booking and a window.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::Booking;

/// The only booking status that blocks a room. Any other value
/// (cancelled, pending, ...) leaves the room available.
pub const STATUS_CONFIRMED: &str = "confirmed";

#[derive(Debug, Error, PartialEq)]
pub enum AvailabilityError {
    #[error("End time must be after start time")]
    InvalidTimeRange {
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    },
}

/// A half-open query window [start, end). Construction fails unless
/// end is strictly after start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<Self, AvailabilityError> {
        if end_time <= start_time {
            return Err(AvailabilityError::InvalidTimeRange {
                start_time,
                end_time,
            });
        }
        Ok(TimeWindow {
            start: start_time,
            end: end_time,
        })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Whole hours in the window, truncated. A 90-minute window is 1 hour;
    /// anything under an hour is 0.
    pub fn duration_hours(&self) -> i64 {
        (self.end - self.start).num_seconds() / 3600
    }

    /// Rental cost for this window at the given hourly rate. Billing uses
    /// the truncated hour count, so a sub-hour window costs 0.0.
    pub fn rental_cost(&self, hourly_rate: f64) -> f64 {
        hourly_rate * self.duration_hours() as f64
    }
}

/// True when `booking` makes the room unavailable for `window`: the booking
/// is confirmed and the half-open intervals overlap. Touching endpoints
/// (booking ends exactly at window start, or starts exactly at window end)
/// do not overlap.
pub fn conflicts_with(booking: &Booking, window: &TimeWindow) -> bool {
    booking.booking_status == STATUS_CONFIRMED
        && booking.start_time < window.end
        && booking.end_time > window.start
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn dt(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn booking(status: &str, start: NaiveDateTime, end: NaiveDateTime) -> Booking {
        Booking {
            booking_id: 1,
            room_id: 1,
            start_time: start,
            end_time: end,
            booked_by: "alice".to_string(),
            booking_status: status.to_string(),
            total_cost: 0.0,
            created_at: None,
            updated_at: None,
        }
    }

    // ── TimeWindow validation ────────────────────────────────

    #[test]
    fn window_rejects_equal_endpoints() {
        let err = TimeWindow::new(dt(12, 0), dt(12, 0)).unwrap_err();
        assert_eq!(
            err,
            AvailabilityError::InvalidTimeRange {
                start_time: dt(12, 0),
                end_time: dt(12, 0),
            }
        );
    }

    #[test]
    fn window_rejects_reversed_endpoints() {
        let err = TimeWindow::new(dt(13, 0), dt(11, 0)).unwrap_err();
        assert_eq!(
            err,
            AvailabilityError::InvalidTimeRange {
                start_time: dt(13, 0),
                end_time: dt(11, 0),
            }
        );
    }

    #[test]
    fn window_accepts_valid_range() {
        let w = TimeWindow::new(dt(10, 0), dt(12, 0)).unwrap();
        assert_eq!(w.start(), dt(10, 0));
        assert_eq!(w.end(), dt(12, 0));
    }

    // ── duration and cost ────────────────────────────────────

    #[test]
    fn duration_counts_whole_hours() {
        let w = TimeWindow::new(dt(10, 0), dt(12, 0)).unwrap();
        assert_eq!(w.duration_hours(), 2);
    }

    #[test]
    fn duration_truncates_partial_hours() {
        let w = TimeWindow::new(dt(10, 0), dt(11, 30)).unwrap();
        assert_eq!(w.duration_hours(), 1);
    }

    #[test]
    fn sub_hour_window_has_zero_duration() {
        let w = TimeWindow::new(dt(10, 0), dt(10, 45)).unwrap();
        assert_eq!(w.duration_hours(), 0);
    }

    #[test]
    fn two_hour_window_at_rate_20_costs_40() {
        let w = TimeWindow::new(dt(10, 0), dt(12, 0)).unwrap();
        assert_eq!(w.rental_cost(20.0), 40.0);
    }

    #[test]
    fn sub_hour_window_costs_nothing() {
        let w = TimeWindow::new(dt(10, 0), dt(10, 45)).unwrap();
        assert_eq!(w.rental_cost(99.0), 0.0);
    }

    // ── conflict predicate ───────────────────────────────────

    #[test]
    fn confirmed_overlap_conflicts() {
        // booking [10:00, 12:00) vs window [11:00, 13:00)
        let b = booking(STATUS_CONFIRMED, dt(10, 0), dt(12, 0));
        let w = TimeWindow::new(dt(11, 0), dt(13, 0)).unwrap();
        assert!(conflicts_with(&b, &w));
    }

    #[test]
    fn booking_ending_at_window_start_does_not_conflict() {
        // booking [10:00, 12:00) vs window [12:00, 13:00)
        let b = booking(STATUS_CONFIRMED, dt(10, 0), dt(12, 0));
        let w = TimeWindow::new(dt(12, 0), dt(13, 0)).unwrap();
        assert!(!conflicts_with(&b, &w));
    }

    #[test]
    fn booking_starting_at_window_end_does_not_conflict() {
        let b = booking(STATUS_CONFIRMED, dt(13, 0), dt(14, 0));
        let w = TimeWindow::new(dt(12, 0), dt(13, 0)).unwrap();
        assert!(!conflicts_with(&b, &w));
    }

    #[test]
    fn booking_containing_window_conflicts() {
        let b = booking(STATUS_CONFIRMED, dt(9, 0), dt(17, 0));
        let w = TimeWindow::new(dt(12, 0), dt(13, 0)).unwrap();
        assert!(conflicts_with(&b, &w));
    }

    #[test]
    fn window_containing_booking_conflicts() {
        let b = booking(STATUS_CONFIRMED, dt(12, 0), dt(13, 0));
        let w = TimeWindow::new(dt(9, 0), dt(17, 0)).unwrap();
        assert!(conflicts_with(&b, &w));
    }

    #[test]
    fn cancelled_overlap_does_not_conflict() {
        let b = booking("cancelled", dt(10, 0), dt(12, 0));
        let w = TimeWindow::new(dt(11, 0), dt(13, 0)).unwrap();
        assert!(!conflicts_with(&b, &w));
    }

    #[test]
    fn unknown_status_does_not_conflict() {
        let b = booking("pending", dt(10, 0), dt(12, 0));
        let w = TimeWindow::new(dt(11, 0), dt(13, 0)).unwrap();
        assert!(!conflicts_with(&b, &w));
    }

    // ── properties ───────────────────────────────────────────

    proptest! {
        #[test]
        fn duration_is_floor_of_seconds(secs in 1i64..2_000_000) {
            let start = dt(0, 0);
            let w = TimeWindow::new(start, start + Duration::seconds(secs)).unwrap();
            prop_assert_eq!(w.duration_hours(), secs / 3600);
        }

        #[test]
        fn cost_is_rate_times_whole_hours(secs in 1i64..2_000_000, rate in 0.0f64..500.0) {
            let start = dt(0, 0);
            let w = TimeWindow::new(start, start + Duration::seconds(secs)).unwrap();
            prop_assert_eq!(w.rental_cost(rate), rate * (secs / 3600) as f64);
        }

        #[test]
        fn conflict_matches_interval_intersection(
            b_start in 0i64..10_000,
            b_len in 1i64..10_000,
            q_start in 0i64..10_000,
            q_len in 1i64..10_000,
        ) {
            let base = dt(0, 0);
            let b = booking(
                STATUS_CONFIRMED,
                base + Duration::seconds(b_start),
                base + Duration::seconds(b_start + b_len),
            );
            let w = TimeWindow::new(
                base + Duration::seconds(q_start),
                base + Duration::seconds(q_start + q_len),
            ).unwrap();

            // overlap iff the half-open intersection is non-empty
            let intersects = b_start.max(q_start) < (b_start + b_len).min(q_start + q_len);
            prop_assert_eq!(conflicts_with(&b, &w), intersects);
        }
    }
}
