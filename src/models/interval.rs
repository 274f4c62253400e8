//! Half-open time intervals within a single day.
//!
//! An [`Interval`] is a `[start, end)` span of minutes. Half-open semantics
//! keep back-to-back bookings from flagging each other: an appointment
//! ending at 10:00 does not conflict with one starting at 10:00.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::time::{TimeOfDay, MINUTES_PER_DAY};

/// A `[start, end)` span of minutes within one day.
///
/// Invariant: `start < end`. Zero-length and inverted spans are rejected at
/// construction, including deserialization. Immutable value type;
/// operations return new intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IntervalWire")]
pub struct Interval {
    start: TimeOfDay,
    end: TimeOfDay,
}

/// Unvalidated wire form; converted through [`Interval::new`].
#[derive(Deserialize)]
struct IntervalWire {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<IntervalWire> for Interval {
    type Error = ScheduleError;

    fn try_from(wire: IntervalWire) -> Result<Self> {
        Self::new(wire.start, wire.end)
    }
}

impl Interval {
    /// Creates an interval, rejecting `start >= end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::InvalidInterval {
                start_min: start.minutes(),
                end_min: end.minutes(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates an interval from raw minute offsets.
    pub fn from_minutes(start_min: u32, end_min: u32) -> Result<Self> {
        if start_min >= end_min {
            return Err(ScheduleError::InvalidInterval { start_min, end_min });
        }
        Self::new(
            TimeOfDay::from_minutes(start_min)?,
            TimeOfDay::from_minutes(end_min)?,
        )
    }

    /// Interval start (inclusive).
    #[inline]
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Interval end (exclusive).
    #[inline]
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Length of the interval in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether a point falls within `[start, end)`.
    #[inline]
    pub fn contains(&self, point: TimeOfDay) -> bool {
        point >= self.start && point < self.end
    }

    /// Whether two intervals overlap.
    ///
    /// Half-open rule: sharing only an endpoint is not an overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Removes `other` from this interval.
    ///
    /// Returns zero, one, or two remaining pieces: zero when `other` covers
    /// this interval, two when `other` sits strictly inside it.
    pub fn subtract(&self, other: &Self) -> Vec<Interval> {
        if !self.overlaps(other) {
            return vec![*self];
        }

        let mut pieces = Vec::with_capacity(2);
        if other.start > self.start {
            pieces.push(Self {
                start: self.start,
                end: other.start,
            });
        }
        if other.end < self.end {
            pieces.push(Self {
                start: other.end,
                end: self.end,
            });
        }
        pieces
    }

    /// Pads both sides by `buffer_minutes`, clamped to `[0, 1440)`.
    pub fn expand(&self, buffer_minutes: u32) -> Interval {
        let start = self.start.minutes().saturating_sub(buffer_minutes);
        let end = (self.end.minutes() + buffer_minutes).min(MINUTES_PER_DAY as u32 - 1);
        // start < end is preserved: start only shrinks and end never drops
        // below self.end, which already exceeds start.
        Self {
            start: TimeOfDay::from_minutes_unchecked(start),
            end: TimeOfDay::from_minutes_unchecked(end.max(self.end.minutes())),
        }
    }

    /// Unions a set of possibly-overlapping intervals into a sorted,
    /// disjoint set.
    ///
    /// Touching intervals (`a.end == b.start`) are merged as well; the
    /// result covers exactly the same minutes as the input. Used to
    /// tolerate overlapping blocked intervals for the same owner and date.
    pub fn coalesce(mut intervals: Vec<Interval>) -> Vec<Interval> {
        intervals.sort_by_key(|iv| (iv.start, iv.end));

        let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
        for iv in intervals {
            match merged.last_mut() {
                Some(last) if iv.start <= last.end => {
                    last.end = last.end.max(iv.end);
                }
                _ => merged.push(iv),
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: &str, end: &str) -> Interval {
        Interval::new(
            TimeOfDay::parse(start).unwrap(),
            TimeOfDay::parse(end).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_construction_rejects_inverted_and_empty() {
        assert!(Interval::from_minutes(600, 540).is_err());
        assert!(Interval::from_minutes(600, 600).is_err());
        assert!(Interval::from_minutes(540, 600).is_ok());
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = iv("09:00", "10:30");
        let b = iv("10:00", "11:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = iv("12:00", "13:00");
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_adjacent_intervals_do_not_overlap() {
        // Half-open boundary rule: back-to-back bookings are not conflicts.
        let morning = iv("09:00", "10:00");
        let next = iv("10:00", "11:00");
        assert!(!morning.overlaps(&next));
        assert!(!next.overlaps(&morning));
    }

    #[test]
    fn test_contains_respects_half_open_end() {
        let a = iv("09:00", "10:00");
        assert!(a.contains(TimeOfDay::parse("09:00").unwrap()));
        assert!(a.contains(TimeOfDay::parse("09:59").unwrap()));
        assert!(!a.contains(TimeOfDay::parse("10:00").unwrap()));
    }

    #[test]
    fn test_subtract_splits_and_clips() {
        let day = iv("09:00", "17:00");

        // Strictly inside: two pieces.
        let pieces = day.subtract(&iv("12:00", "13:00"));
        assert_eq!(pieces, vec![iv("09:00", "12:00"), iv("13:00", "17:00")]);

        // Clipping the front: one piece.
        assert_eq!(day.subtract(&iv("08:00", "10:00")), vec![iv("10:00", "17:00")]);

        // Covering: nothing left.
        assert!(day.subtract(&iv("08:00", "18:00")).is_empty());

        // Disjoint: untouched.
        assert_eq!(day.subtract(&iv("18:00", "19:00")), vec![day]);
    }

    #[test]
    fn test_expand_clamps_to_day() {
        let a = iv("00:10", "23:45");
        let padded = a.expand(30);
        assert_eq!(padded.start().minutes(), 0);
        assert_eq!(padded.end().minutes(), 1439);

        let b = iv("10:00", "10:30").expand(10);
        assert_eq!(b, iv("09:50", "10:40"));
    }

    #[test]
    fn test_coalesce_merges_overlapping_and_touching() {
        let merged = Interval::coalesce(vec![
            iv("13:00", "14:00"),
            iv("09:00", "10:00"),
            iv("09:30", "11:00"),
            iv("11:00", "12:00"),
        ]);
        assert_eq!(merged, vec![iv("09:00", "12:00"), iv("13:00", "14:00")]);
    }

    #[test]
    fn test_serde_rejects_inverted_interval() {
        let ok: Interval = serde_json::from_str(r#"{"start":"09:00","end":"10:00"}"#).unwrap();
        assert_eq!(ok, iv("09:00", "10:00"));

        assert!(serde_json::from_str::<Interval>(r#"{"start":"10:00","end":"09:00"}"#).is_err());
        assert!(serde_json::from_str::<Interval>(r#"{"start":"10:00","end":"10:00"}"#).is_err());
    }

    #[test]
    fn test_coalesce_empty_and_disjoint() {
        assert!(Interval::coalesce(Vec::new()).is_empty());

        let disjoint = vec![iv("09:00", "10:00"), iv("11:00", "12:00")];
        assert_eq!(Interval::coalesce(disjoint.clone()), disjoint);
    }
}
