//! Data-access collaborator boundary.
//!
//! The engine never fetches anything itself; callers hand it calendars,
//! blocked intervals, and settings that are already materialized.
//! [`ScheduleStore`] is the contract those callers satisfy — production
//! implementations sit in front of the REST backend, while
//! [`InMemoryStore`] is the stub used for tests and local development.
//!
//! Timeouts, retries, and caching all belong behind this trait, never in
//! the engine.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::engine::AvailabilityEngine;
use crate::error::Result;
use crate::models::{BlockedInterval, ScheduleSettings, TimeOfDay, WorkingHoursCalendar};

/// Source of calendars, blocked time, and policy for availability queries.
///
/// One call's worth of fetched data is treated as a consistent snapshot;
/// the engine does not refetch mid-computation.
pub trait ScheduleStore {
    /// Working hours for an owner (staff member or resource), if any are
    /// recorded.
    fn working_hours(&self, owner_id: &str) -> Option<WorkingHoursCalendar>;

    /// All blocked intervals for an owner on a date.
    fn blocked_intervals(&self, owner_id: &str, date: NaiveDate) -> Vec<BlockedInterval>;

    /// Global scheduling policy.
    fn settings(&self) -> ScheduleSettings;
}

/// Fetch-then-compute wiring for the common booking query.
///
/// An owner with no recorded working hours has no bookable slots.
///
/// This helper gives no transactional guarantee: two concurrent calls can
/// both see the same slot as free. A booking service must serialize its
/// check-then-book sequence per (owner, date) on top of this.
pub fn available_slots_for(
    store: &impl ScheduleStore,
    engine: &AvailabilityEngine,
    owner_id: &str,
    date: NaiveDate,
    duration_minutes: u32,
) -> Result<Vec<TimeOfDay>> {
    let Some(calendar) = store.working_hours(owner_id) else {
        return Ok(Vec::new());
    };
    let blocked = store.blocked_intervals(owner_id, date);
    let settings = store.settings();
    engine.available_slots(date, duration_minutes, &calendar, &blocked, &settings)
}

/// In-memory stub of the data-access boundary.
///
/// Holds everything in plain maps and vectors. Blocks follow the booking
/// lifecycle: [`add_block`](Self::add_block) when an appointment, break,
/// or time-off entry is created, [`cancel_block`](Self::cancel_block) when
/// it is cancelled or deleted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    calendars: HashMap<String, WorkingHoursCalendar>,
    blocks: Vec<BlockedInterval>,
    settings: ScheduleSettings,
}

impl InMemoryStore {
    /// Creates an empty store with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the global settings.
    pub fn set_settings(&mut self, settings: ScheduleSettings) {
        self.settings = settings;
    }

    /// Records or replaces an owner's working hours.
    pub fn set_working_hours(&mut self, owner_id: impl Into<String>, calendar: WorkingHoursCalendar) {
        self.calendars.insert(owner_id.into(), calendar);
    }

    /// Adds a blocked interval.
    pub fn add_block(&mut self, block: BlockedInterval) {
        self.blocks.push(block);
    }

    /// Removes a previously added block; returns whether one was removed.
    pub fn cancel_block(&mut self, block: &BlockedInterval) -> bool {
        match self.blocks.iter().position(|b| b == block) {
            Some(idx) => {
                self.blocks.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl ScheduleStore for InMemoryStore {
    fn working_hours(&self, owner_id: &str) -> Option<WorkingHoursCalendar> {
        self.calendars.get(owner_id).cloned()
    }

    fn blocked_intervals(&self, owner_id: &str, date: NaiveDate) -> Vec<BlockedInterval> {
        self.blocks
            .iter()
            .filter(|b| b.owner_id == owner_id && b.date == date)
            .cloned()
            .collect()
    }

    fn settings(&self) -> ScheduleSettings {
        self.settings.clone()
    }
}
