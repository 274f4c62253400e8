//! Slot generation and availability computation.
//!
//! The booking pipeline: a working-hours calendar answers "open at all?",
//! [`slots`] produces the candidate grid, and [`AvailabilityEngine`]
//! removes candidates that collide with booked time (subject to the
//! overlap and buffer policy in
//! [`ScheduleSettings`](crate::models::ScheduleSettings)).

mod availability;
mod slots;

pub use availability::AvailabilityEngine;
pub use slots::{slots, SlotIter};
