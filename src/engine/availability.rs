//! Availability queries: bookable slots and conflict checks.
//!
//! Combines a working-hours calendar, a snapshot of blocked intervals,
//! and the scheduling policy into the two questions the booking flow
//! asks: "which start times can this owner still take on this date?"
//! and "does this specific proposal collide with anything?".
//!
//! # Algorithm
//!
//! 1. Closed weekday → no slots.
//! 2. Generate the candidate grid over the day's operating interval.
//! 3. `allow_overlap` disables filtering and returns every candidate.
//! 4. Otherwise pad each same-date block by the buffer, union them, and
//!    drop candidates whose `[start, start + duration)` touches any.
//!
//! Results are always in ascending start order; there is no randomization
//! anywhere, so identical inputs give identical answers.
//!
//! # Consistency
//!
//! The engine is pure: it never fetches, caches, or mutates anything.
//! It only judges the blocked-interval snapshot it is handed. A service
//! accepting concurrent bookings must serialize check-then-book per
//! (owner, date) itself — two calls can both see the same free slot.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::engine::slots::slots;
use crate::error::Result;
use crate::models::{
    BlockedInterval, Interval, ScheduleSettings, TimeOfDay, WorkingHoursCalendar,
};

/// Pure, stateless availability computation.
///
/// Every method is a synchronous function of its arguments; concurrent
/// calls for different owners or dates cannot interfere.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slotwise::engine::AvailabilityEngine;
/// use slotwise::models::{
///     BlockedInterval, Interval, ScheduleSettings, TimeOfDay, WorkingHoursCalendar,
/// };
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(); // a Monday
/// let hours = Interval::new(
///     TimeOfDay::parse("09:00").unwrap(),
///     TimeOfDay::parse("11:00").unwrap(),
/// ).unwrap();
/// let calendar = WorkingHoursCalendar::closed().with_day(chrono::Weekday::Mon, hours);
///
/// let booked = BlockedInterval::appointment(
///     "stylist-1",
///     date,
///     Interval::new(
///         TimeOfDay::parse("10:00").unwrap(),
///         TimeOfDay::parse("10:30").unwrap(),
///     ).unwrap(),
/// );
///
/// let settings = ScheduleSettings::new().with_slot_step(30);
/// let engine = AvailabilityEngine::new();
/// let open = engine
///     .available_slots(date, 30, &calendar, &[booked], &settings)
///     .unwrap();
///
/// let open: Vec<String> = open.iter().map(|t| t.to_string()).collect();
/// assert_eq!(open, vec!["09:00", "10:30"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityEngine;

impl AvailabilityEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// Returns the bookable start times for one owner on one date.
    ///
    /// `blocked` is the snapshot of that owner's appointments, breaks,
    /// and time off; entries for other dates are ignored. Overlapping
    /// blocks are tolerated (they are unioned before filtering).
    ///
    /// Invalid policy (zero slot step) fails the whole call — no partial
    /// results.
    pub fn available_slots(
        &self,
        date: NaiveDate,
        duration_minutes: u32,
        calendar: &WorkingHoursCalendar,
        blocked: &[BlockedInterval],
        settings: &ScheduleSettings,
    ) -> Result<Vec<TimeOfDay>> {
        settings.validate()?;

        let weekday = date.weekday();
        let Some(operating) = calendar.operating_interval(weekday) else {
            debug!(%date, ?weekday, "closed on requested date, no slots");
            return Ok(Vec::new());
        };

        let candidates = slots(operating, duration_minutes, settings.slot_step_minutes)?;

        if settings.allow_overlap {
            trace!(%date, "overlap allowed, returning unfiltered candidates");
            return Ok(candidates.collect());
        }

        let busy = buffered_blocks(date, blocked, settings.buffer_minutes);

        let open: Vec<TimeOfDay> = candidates
            .filter(|slot| {
                let start = slot.minutes();
                let end = start + duration_minutes;
                // Slot filtering is conservative at the trailing edge: a
                // slot ending exactly where busy time begins is not
                // offered, though starting exactly where busy time ends
                // is fine.
                !busy
                    .iter()
                    .any(|b| start < b.end().minutes() && b.start().minutes() <= end)
            })
            .collect();

        trace!(
            %date,
            duration_minutes,
            blocked = busy.len(),
            available = open.len(),
            "computed available slots"
        );
        Ok(open)
    }

    /// Whether a proposed booking collides with the blocked snapshot.
    ///
    /// Point query for direct booking validation, independent of the slot
    /// grid. The buffer is applied once, to the blocked side, so a slot
    /// reported by [`available_slots`](Self::available_slots) never turns
    /// around and reports a conflict here.
    pub fn has_conflict(
        &self,
        date: NaiveDate,
        proposed: Interval,
        blocked: &[BlockedInterval],
        buffer_minutes: u32,
    ) -> bool {
        buffered_blocks(date, blocked, buffer_minutes)
            .iter()
            .any(|b| b.overlaps(&proposed))
    }
}

/// Pads every same-date block by the buffer and unions the result into a
/// sorted, disjoint set.
fn buffered_blocks(
    date: NaiveDate,
    blocked: &[BlockedInterval],
    buffer_minutes: u32,
) -> Vec<Interval> {
    Interval::coalesce(
        blocked
            .iter()
            .filter(|b| b.date == date)
            .map(|b| b.interval.expand(buffer_minutes))
            .collect(),
    )
}
