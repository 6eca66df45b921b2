//! Read-only projections of a store snapshot.
//!
//! Views hold no business state. Each one is built from a borrowed
//! [`SchedulingState`](crate::models::SchedulingState) and can be rebuilt at
//! any time from a newer snapshot.

pub mod capacity;
pub mod grid;
pub mod slot_details;
pub mod student;

pub use capacity::{Availability, CapacityLevel};
pub use grid::{GridCell, GridRow, SlotSummary, WeeklyGrid};
pub use slot_details::{EnrollmentLine, SlotDetails};
pub use student::{MakeupOption, MySchedule, RecurringSlotStatus};
