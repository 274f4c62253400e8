//! Scheduling domain models.
//!
//! Core value types for appointment availability: times-of-day, half-open
//! intervals, weekly working-hours calendars, blocked time, and policy
//! settings. All are immutable values — queries construct them fresh and
//! never mutate shared state.
//!
//! # Domain Mappings
//!
//! | slotwise | Salon | Clinic | Rentals |
//! |----------|-------|--------|---------|
//! | Owner | Stylist | Practitioner | Room/Equipment |
//! | BlockedInterval | Appointment/Break | Visit/Leave | Reservation |
//! | WorkingHoursCalendar | Shop hours | Clinic hours | Opening hours |

mod booking;
mod calendar;
mod interval;
mod time;

pub use booking::{BlockKind, BlockedInterval, ScheduleSettings};
pub use calendar::WorkingHoursCalendar;
pub use interval::Interval;
pub use time::{ClockFormat, TimeOfDay, MINUTES_PER_DAY};
