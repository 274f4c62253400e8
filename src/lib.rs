//! Appointment availability and schedule-layout engine.
//!
//! Consolidates the time/schedule computation of a booking application
//! into one coherent library: time-of-day parsing, half-open intervals,
//! weekly working-hours calendars, candidate slot generation, conflict
//! filtering, and day-grid layout for rendering.
//!
//! The crate is a library, not a service. It performs no I/O: the caller
//! fetches calendars, blocked intervals, and policy through the
//! [`store::ScheduleStore`] boundary (or any other means) and hands the
//! engine already-materialized values. Every query is a pure, synchronous
//! function of its inputs — concurrent calls cannot interfere.
//!
//! # Modules
//!
//! - **`models`**: Value types — [`TimeOfDay`](models::TimeOfDay),
//!   [`Interval`](models::Interval),
//!   [`WorkingHoursCalendar`](models::WorkingHoursCalendar),
//!   [`BlockedInterval`](models::BlockedInterval),
//!   [`ScheduleSettings`](models::ScheduleSettings)
//! - **`engine`**: [`slots`](engine::slots()) candidate generation and the
//!   [`AvailabilityEngine`](engine::AvailabilityEngine)
//! - **`layout`**: [`layout_day`](layout::layout_day) grid placement
//! - **`store`**: the data-access collaborator trait plus an in-memory stub
//! - **`error`**: [`ScheduleError`](error::ScheduleError)
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use slotwise::engine::AvailabilityEngine;
//! use slotwise::models::{
//!     BlockedInterval, Interval, ScheduleSettings, TimeOfDay, WorkingHoursCalendar,
//! };
//!
//! // Shop open Monday-Friday, nine to five.
//! let calendar = WorkingHoursCalendar::from_days_open_str(
//!     "0111110",
//!     TimeOfDay::parse("09:00")?,
//!     TimeOfDay::parse("17:00")?,
//! )?;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(); // Monday
//! let lunch = BlockedInterval::break_time(
//!     "stylist-1",
//!     date,
//!     Interval::new(TimeOfDay::parse("12:00")?, TimeOfDay::parse("13:00")?)?,
//! );
//!
//! let settings = ScheduleSettings::new().with_slot_step(30).with_buffer(5);
//! let open = AvailabilityEngine::new()
//!     .available_slots(date, 45, &calendar, &[lunch], &settings)?;
//!
//! assert!(!open.is_empty());
//! # Ok::<(), slotwise::error::ScheduleError>(())
//! ```
//!
//! # Error Handling
//!
//! Malformed input is never coerced to a default. A time that fails to
//! parse is a [`ScheduleError::Parse`](error::ScheduleError), not
//! midnight — treating it as midnight could report booked slots as free.

pub mod engine;
pub mod error;
pub mod layout;
pub mod models;
pub mod store;

pub use error::{Result, ScheduleError};
