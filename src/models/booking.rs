//! Blocked time and scheduling policy.
//!
//! A [`BlockedInterval`] is anything that removes availability for an
//! owner (a staff member or bookable resource): a booked appointment, a
//! break, a time-off entry. Blocks are created when an appointment is
//! booked or a break is added and removed on cancellation; the engine
//! treats whatever set it is handed as a consistent snapshot.
//!
//! [`ScheduleSettings`] carries the global policy knobs: default duration,
//! slot step, overlap allowance, and booking buffer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::interval::Interval;

/// Why a span of time is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// A booked customer appointment.
    Appointment,
    /// A staff break.
    Break,
    /// Vacation, sick leave, or other absence.
    TimeOff,
    /// Anything else that removes availability.
    Other,
}

/// A span of unavailable time for one owner on one date.
///
/// Blocks for the same owner and date may overlap (double entry, a break
/// inside a time-off day); the engine unions them rather than assuming
/// disjointness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedInterval {
    /// Staff member or resource this block belongs to.
    pub owner_id: String,
    /// Calendar date the block falls on.
    pub date: NaiveDate,
    /// The unavailable span.
    pub interval: Interval,
    /// Block classification.
    pub kind: BlockKind,
}

impl BlockedInterval {
    /// Creates a block of the given kind.
    pub fn new(
        owner_id: impl Into<String>,
        date: NaiveDate,
        interval: Interval,
        kind: BlockKind,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            date,
            interval,
            kind,
        }
    }

    /// Creates an appointment block.
    pub fn appointment(owner_id: impl Into<String>, date: NaiveDate, interval: Interval) -> Self {
        Self::new(owner_id, date, interval, BlockKind::Appointment)
    }

    /// Creates a break block.
    pub fn break_time(owner_id: impl Into<String>, date: NaiveDate, interval: Interval) -> Self {
        Self::new(owner_id, date, interval, BlockKind::Break)
    }

    /// Creates a time-off block.
    pub fn time_off(owner_id: impl Into<String>, date: NaiveDate, interval: Interval) -> Self {
        Self::new(owner_id, date, interval, BlockKind::TimeOff)
    }
}

/// Global scheduling policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// Appointment length assumed when a service does not specify one.
    pub default_duration_minutes: u32,
    /// Spacing between candidate slot starts.
    pub slot_step_minutes: u32,
    /// When set, conflict filtering is disabled entirely and every
    /// in-hours slot is offered.
    pub allow_overlap: bool,
    /// Padding applied to both sides of every blocked interval before
    /// conflict checks, to prevent back-to-back bookings.
    pub buffer_minutes: u32,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            default_duration_minutes: 30,
            slot_step_minutes: 15,
            allow_overlap: false,
            buffer_minutes: 0,
        }
    }
}

impl ScheduleSettings {
    /// Creates settings with the crate defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default appointment duration.
    pub fn with_default_duration(mut self, minutes: u32) -> Self {
        self.default_duration_minutes = minutes;
        self
    }

    /// Sets the slot step.
    pub fn with_slot_step(mut self, minutes: u32) -> Self {
        self.slot_step_minutes = minutes;
        self
    }

    /// Enables or disables overlap filtering.
    pub fn with_allow_overlap(mut self, allow: bool) -> Self {
        self.allow_overlap = allow;
        self
    }

    /// Sets the booking buffer.
    pub fn with_buffer(mut self, minutes: u32) -> Self {
        self.buffer_minutes = minutes;
        self
    }

    /// Checks the policy values the engine depends on.
    ///
    /// A zero slot step would make candidate generation loop forever, so
    /// it is rejected up front rather than guarded per-iteration.
    pub fn validate(&self) -> Result<()> {
        if self.slot_step_minutes == 0 {
            return Err(ScheduleError::config(
                "slot_step_minutes",
                "must be positive",
            ));
        }
        Ok(())
    }
}
