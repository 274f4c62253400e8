//! Working-hours calendars.
//!
//! Per-weekday open/closed state with one operating interval per open day.
//! A business and each staff member carry independent calendars; slot
//! computation reads them, only an explicit settings update replaces them.
//!
//! # Legacy encoding
//! Upstream storage keeps a 7-character `daysOpen` string of `'0'`/`'1'`
//! (index 0 = Sunday) plus a shared open/close time pair. The codec here
//! round-trips that representation without loss; strings shorter than 7
//! characters treat the missing trailing days as closed.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::interval::Interval;

/// Number of weekdays tracked per calendar.
const DAYS_PER_WEEK: usize = 7;

/// Weekly open/closed pattern with operating hours per open day.
///
/// The representation makes the open-day-has-hours invariant unbreakable:
/// a day is open exactly when it carries an operating interval.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use slotwise::models::{Interval, TimeOfDay, WorkingHoursCalendar};
///
/// let nine_to_five = Interval::new(
///     TimeOfDay::parse("09:00").unwrap(),
///     TimeOfDay::parse("17:00").unwrap(),
/// ).unwrap();
///
/// let calendar = WorkingHoursCalendar::closed()
///     .with_day(Weekday::Mon, nine_to_five)
///     .with_day(Weekday::Tue, nine_to_five);
///
/// assert!(calendar.is_open(Weekday::Mon));
/// assert!(!calendar.is_open(Weekday::Sun));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursCalendar {
    /// Operating interval per weekday, index 0 = Sunday.
    hours: [Option<Interval>; DAYS_PER_WEEK],
}

impl WorkingHoursCalendar {
    /// Creates a calendar with every day closed.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Opens a weekday with the given operating interval.
    pub fn with_day(mut self, weekday: Weekday, operating: Interval) -> Self {
        self.hours[day_index(weekday)] = Some(operating);
        self
    }

    /// Closes a weekday.
    pub fn without_day(mut self, weekday: Weekday) -> Self {
        self.hours[day_index(weekday)] = None;
        self
    }

    /// Whether the owner is open on the given weekday.
    #[inline]
    pub fn is_open(&self, weekday: Weekday) -> bool {
        self.hours[day_index(weekday)].is_some()
    }

    /// Operating interval for a weekday.
    ///
    /// `None` covers both "closed" and "no hours recorded" — the two are
    /// the same outcome here, so callers wanting to distinguish intent
    /// should check [`is_open`](Self::is_open) first.
    #[inline]
    pub fn operating_interval(&self, weekday: Weekday) -> Option<Interval> {
        self.hours[day_index(weekday)]
    }

    /// Decodes the legacy `daysOpen` string with a shared open/close pair.
    ///
    /// Each `'1'` day receives `[open, close)`. Strings shorter than 7
    /// characters leave the missing trailing days closed; strings longer
    /// than 7 or containing anything but `'0'`/`'1'` are parse errors.
    pub fn from_days_open_str(
        days_open: &str,
        open: crate::models::TimeOfDay,
        close: crate::models::TimeOfDay,
    ) -> Result<Self> {
        if days_open.len() > DAYS_PER_WEEK {
            return Err(ScheduleError::parse(
                days_open,
                "daysOpen string has more than 7 days",
            ));
        }

        let operating = Interval::new(open, close)?;
        let mut hours = [None; DAYS_PER_WEEK];
        for (idx, ch) in days_open.chars().enumerate() {
            match ch {
                '1' => hours[idx] = Some(operating),
                '0' => {}
                other => {
                    return Err(ScheduleError::parse(
                        days_open,
                        format!("unexpected character {other:?}, expected '0' or '1'"),
                    ));
                }
            }
        }
        Ok(Self { hours })
    }

    /// Encodes the open/closed pattern back into the 7-character
    /// `daysOpen` string (index 0 = Sunday).
    pub fn days_open_string(&self) -> String {
        self.hours
            .iter()
            .map(|day| if day.is_some() { '1' } else { '0' })
            .collect()
    }

    /// Iterates `(weekday, operating interval)` for every open day,
    /// Sunday first.
    pub fn open_days(&self) -> impl Iterator<Item = (Weekday, Interval)> + '_ {
        self.hours
            .iter()
            .enumerate()
            .filter_map(|(idx, day)| day.map(|iv| (weekday_from_index(idx), iv)))
    }
}

/// Maps a weekday to the legacy index (0 = Sunday .. 6 = Saturday).
#[inline]
fn day_index(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

fn weekday_from_index(idx: usize) -> Weekday {
    match idx {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}
