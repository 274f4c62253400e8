//! Error types for the availability engine.
//!
//! Every malformed input surfaces as a distinct, inspectable error value.
//! Nothing is coerced to a default: a time that fails to parse is never
//! treated as midnight, since a silently-wrong time could report a booked
//! slot as free.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors produced by parsing, construction, and engine queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A time, weekday string, or other textual input was malformed.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The offending input, verbatim.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An interval's start did not strictly precede its end, or the span
    /// would leave the day.
    #[error("invalid interval [{start_min}, {end_min}): must lie within one day with start before end")]
    InvalidInterval {
        /// Requested start, minutes since midnight.
        start_min: u32,
        /// Requested end, minutes since midnight.
        end_min: u32,
    },

    /// A policy or grid parameter was out of its valid range.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl ScheduleError {
    pub(crate) fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_field_and_value() {
        let e = ScheduleError::parse("25:99", "hour out of range");
        assert!(e.to_string().contains("25:99"));
        assert!(e.to_string().contains("hour out of range"));

        let e = ScheduleError::config("slot_step_minutes", "must be positive");
        assert!(e.to_string().contains("slot_step_minutes"));
    }
}
