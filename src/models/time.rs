//! Time-of-day model.
//!
//! Canonical representation for wall-clock times: minutes since midnight,
//! always in `[0, 1440)`. Upstream storage encodes times two ways — `"HH:MM"`
//! strings and two-element `[hour, minute]` numeric arrays — and both parse
//! to the same [`TimeOfDay`] for the same wall-clock time.
//!
//! # Time Model
//! All times are naive wall-clock minutes within a single day. There is no
//! timezone or DST handling at this layer; appointments may not cross
//! midnight.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// Minutes in one day. Times-of-day are strictly below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day, stored as minutes since midnight.
///
/// Invariant: the stored value is in `[0, 1440)`. All constructors enforce
/// this; malformed input yields [`ScheduleError::Parse`], never a default.
///
/// # Examples
///
/// ```
/// use slotwise::models::TimeOfDay;
///
/// let a = TimeOfDay::parse("14:30").unwrap();
/// let b = TimeOfDay::try_from([14, 30]).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.minutes(), 870);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u16,
}

/// Clock rendering style for [`TimeOfDay::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    /// 12-hour clock with AM/PM suffix, e.g. `2:30 PM`.
    H12,
    /// 24-hour clock, e.g. `14:30`.
    H24,
}

impl TimeOfDay {
    /// Midnight, the first minute of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Creates a time from hour (0–23) and minute (0–59).
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        Self::from_hour_minute(hour as i64, minute as i64)
    }

    /// Creates a time from a raw minute offset since midnight.
    pub fn from_minutes(minutes: u32) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY as u32 {
            return Err(ScheduleError::parse(
                minutes.to_string(),
                "minute offset must be below 1440",
            ));
        }
        Ok(Self {
            minutes: minutes as u16,
        })
    }

    /// Parses an `"H:MM"` / `"HH:MM"` time string.
    ///
    /// Hour must be 0–23 and minute 0–59. Anything else — missing colon,
    /// non-numeric parts, out-of-range components — is a
    /// [`ScheduleError::Parse`].
    pub fn parse(input: &str) -> Result<Self> {
        let (hour_part, minute_part) = input
            .split_once(':')
            .ok_or_else(|| ScheduleError::parse(input, "expected `HH:MM`"))?;

        let hour: i64 = hour_part
            .trim()
            .parse()
            .map_err(|_| ScheduleError::parse(input, "hour is not an integer"))?;
        let minute: i64 = minute_part
            .trim()
            .parse()
            .map_err(|_| ScheduleError::parse(input, "minute is not an integer"))?;

        Self::from_hour_minute(hour, minute)
            .map_err(|_| ScheduleError::parse(input, "hour or minute out of range"))
    }

    fn from_hour_minute(hour: i64, minute: i64) -> Result<Self> {
        if !(0..24).contains(&hour) || !(0..60).contains(&minute) {
            return Err(ScheduleError::parse(
                format!("[{hour}, {minute}]"),
                "hour must be 0-23 and minute 0-59",
            ));
        }
        Ok(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Internal constructor for values already proven in range.
    #[inline]
    pub(crate) fn from_minutes_unchecked(minutes: u32) -> Self {
        debug_assert!(minutes < MINUTES_PER_DAY as u32);
        Self {
            minutes: minutes as u16,
        }
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u32 {
        self.minutes as u32
    }

    /// Hour component (0–23).
    #[inline]
    pub fn hour(&self) -> u32 {
        (self.minutes / 60) as u32
    }

    /// Minute component (0–59).
    #[inline]
    pub fn minute(&self) -> u32 {
        (self.minutes % 60) as u32
    }

    /// Adds a duration, erroring if the result would leave the day.
    ///
    /// Wrapping past midnight is never silent: an appointment that would
    /// cross midnight is a modelling error, not a next-day time. Durations
    /// are unbounded, so the sum is computed in 64 bits — a duration near
    /// `u32::MAX` must error, not wrap around to an in-range time.
    pub fn add_minutes(&self, duration_minutes: u32) -> Result<Self> {
        let end = self.minutes() as u64 + duration_minutes as u64;
        if end >= MINUTES_PER_DAY as u64 {
            return Err(ScheduleError::InvalidInterval {
                start_min: self.minutes(),
                end_min: end.min(u32::MAX as u64) as u32,
            });
        }
        Ok(Self { minutes: end as u16 })
    }

    /// Formats for display in the requested clock style.
    ///
    /// Minute 870 renders as `"2:30 PM"` (12-hour) or `"14:30"` (24-hour).
    pub fn format(&self, style: ClockFormat) -> String {
        match style {
            ClockFormat::H24 => format!("{:02}:{:02}", self.hour(), self.minute()),
            ClockFormat::H12 => {
                let suffix = if self.hour() < 12 { "AM" } else { "PM" };
                let hour12 = match self.hour() % 12 {
                    0 => 12,
                    h => h,
                };
                format!("{}:{:02} {}", hour12, self.minute(), suffix)
            }
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(ClockFormat::H24))
    }
}

impl TryFrom<[i64; 2]> for TimeOfDay {
    type Error = ScheduleError;

    /// Converts the legacy `[hour, minute]` array encoding.
    fn try_from(pair: [i64; 2]) -> Result<Self> {
        Self::from_hour_minute(pair[0], pair[1])
    }
}

impl TryFrom<(i64, i64)> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(pair: (i64, i64)) -> Result<Self> {
        Self::from_hour_minute(pair.0, pair.1)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format(ClockFormat::H24))
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    /// Accepts both upstream encodings: `"HH:MM"` and `[hour, minute]`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Encoded {
            Text(String),
            Pair([i64; 2]),
        }

        match Encoded::deserialize(deserializer)? {
            Encoded::Text(s) => TimeOfDay::parse(&s).map_err(D::Error::custom),
            Encoded::Pair(p) => TimeOfDay::try_from(p).map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_and_array_agree() {
        for (text, pair) in [
            ("0:00", [0, 0]),
            ("09:05", [9, 5]),
            ("9:05", [9, 5]),
            ("14:30", [14, 30]),
            ("23:59", [23, 59]),
        ] {
            let from_text = TimeOfDay::parse(text).unwrap();
            let from_pair = TimeOfDay::try_from(pair).unwrap();
            assert_eq!(from_text, from_pair, "mismatch for {text}");
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["25:99", "12:60", "24:00", "1430", "ab:cd", "12:", ":30", "-1:10"] {
            assert!(
                matches!(TimeOfDay::parse(bad), Err(ScheduleError::Parse { .. })),
                "{bad} should fail to parse"
            );
        }
        assert!(TimeOfDay::try_from([-1, 70]).is_err());
        assert!(TimeOfDay::try_from((24, 0)).is_err());
    }

    #[test]
    fn test_minute_offset_bounds() {
        assert_eq!(TimeOfDay::from_minutes(870).unwrap().minutes(), 870);
        assert!(TimeOfDay::from_minutes(1440).is_err());
    }

    #[test]
    fn test_display_formats() {
        let t = TimeOfDay::from_minutes(870).unwrap();
        assert_eq!(t.format(ClockFormat::H12), "2:30 PM");
        assert_eq!(t.format(ClockFormat::H24), "14:30");

        let midnight = TimeOfDay::MIDNIGHT;
        assert_eq!(midnight.format(ClockFormat::H12), "12:00 AM");
        assert_eq!(midnight.format(ClockFormat::H24), "00:00");

        let noon = TimeOfDay::new(12, 0).unwrap();
        assert_eq!(noon.format(ClockFormat::H12), "12:00 PM");
        assert_eq!(TimeOfDay::new(9, 5).unwrap().to_string(), "09:05");
    }

    #[test]
    fn test_add_minutes_cannot_cross_midnight() {
        let t = TimeOfDay::parse("23:00").unwrap();
        assert_eq!(t.add_minutes(30).unwrap(), TimeOfDay::parse("23:30").unwrap());
        assert!(matches!(
            t.add_minutes(60),
            Err(ScheduleError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_add_minutes_huge_duration_errors_instead_of_wrapping() {
        // 09:00 + (u32::MAX - 39) wraps to an in-range minute in 32-bit
        // arithmetic; it must be an error, never a plausible-looking time.
        let t = TimeOfDay::parse("09:00").unwrap();
        assert!(matches!(
            t.add_minutes(u32::MAX - 39),
            Err(ScheduleError::InvalidInterval { .. })
        ));
        assert!(t.add_minutes(u32::MAX).is_err());
    }

    #[test]
    fn test_serde_round_trips_both_legacy_encodings() {
        let t: TimeOfDay = serde_json::from_str("\"14:30\"").unwrap();
        assert_eq!(t.minutes(), 870);

        let t: TimeOfDay = serde_json::from_str("[14, 30]").unwrap();
        assert_eq!(t.minutes(), 870);

        assert_eq!(serde_json::to_string(&t).unwrap(), "\"14:30\"");

        assert!(serde_json::from_str::<TimeOfDay>("\"25:99\"").is_err());
        assert!(serde_json::from_str::<TimeOfDay>("[-1, 70]").is_err());
    }
}
