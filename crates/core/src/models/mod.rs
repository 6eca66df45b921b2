pub mod schedule;
pub mod student;
pub mod time_slot;

pub use schedule::{CurrentStudent, SchedulingState};
pub use student::{BookingType, Student};
pub use time_slot::TimeSlot;
