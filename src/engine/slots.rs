//! Candidate slot generation.
//!
//! Produces the raw grid of possible appointment start times from an
//! operating interval, before any conflict filtering. Generation is lazy
//! and deterministic: starts ascend from the interval's opening time in
//! fixed steps, and a slot is only offered if the full appointment fits
//! before closing.

use crate::error::{Result, ScheduleError};
use crate::models::{Interval, TimeOfDay};

/// Returns the candidate start times for appointments of
/// `duration_minutes` within `operating`, spaced `step_minutes` apart.
///
/// The sequence is finite, lazy, and restartable (the iterator is
/// `Clone`). A duration longer than the operating interval yields an
/// empty sequence — that is a valid answer, not an error. A zero step
/// would never advance and is rejected as configuration.
///
/// # Examples
///
/// ```
/// use slotwise::engine::slots;
/// use slotwise::models::{Interval, TimeOfDay};
///
/// let business_day = Interval::new(
///     TimeOfDay::parse("09:00").unwrap(),
///     TimeOfDay::parse("17:00").unwrap(),
/// ).unwrap();
///
/// let starts: Vec<_> = slots(business_day, 30, 30).unwrap().collect();
/// assert_eq!(starts.len(), 16);
/// assert_eq!(starts[0], TimeOfDay::parse("09:00").unwrap());
/// assert_eq!(starts[15], TimeOfDay::parse("16:30").unwrap());
/// ```
pub fn slots(operating: Interval, duration_minutes: u32, step_minutes: u32) -> Result<SlotIter> {
    if step_minutes == 0 {
        return Err(ScheduleError::config("step_minutes", "must be positive"));
    }

    if duration_minutes > operating.duration_minutes() {
        return Ok(SlotIter::empty(step_minutes));
    }

    Ok(SlotIter {
        cursor: operating.start().minutes(),
        last_start: operating.end().minutes() - duration_minutes,
        step: step_minutes,
        done: false,
    })
}

/// Lazy iterator over candidate slot starts, ascending.
#[derive(Debug, Clone)]
pub struct SlotIter {
    cursor: u32,
    last_start: u32,
    step: u32,
    done: bool,
}

impl SlotIter {
    fn empty(step: u32) -> Self {
        Self {
            cursor: 0,
            last_start: 0,
            step,
            done: true,
        }
    }
}

impl Iterator for SlotIter {
    type Item = TimeOfDay;

    fn next(&mut self) -> Option<TimeOfDay> {
        if self.done || self.cursor > self.last_start {
            self.done = true;
            return None;
        }
        let start = TimeOfDay::from_minutes_unchecked(self.cursor);
        // Saturate: a step near u32::MAX is valid policy input and must
        // exhaust the iterator, not wrap the cursor backwards.
        self.cursor = self.cursor.saturating_add(self.step);
        Some(start)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done || self.cursor > self.last_start {
            return (0, Some(0));
        }
        let remaining = ((self.last_start - self.cursor) / self.step + 1) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlotIter {}

impl std::iter::FusedIterator for SlotIter {}
