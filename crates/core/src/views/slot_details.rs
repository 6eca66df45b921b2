use super::capacity::CapacityLevel;
use crate::{
    errors::{ScheduleError, ScheduleResult},
    models::{BookingType, SchedulingState},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentLine {
    pub student_id: String,
    pub name: String,
    pub booking_type: BookingType,
}

/// Everything the admin detail view shows for one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDetails {
    pub slot_id: String,
    pub title: String,
    pub filled: usize,
    pub capacity: usize,
    pub level: CapacityLevel,
    pub students: Vec<EnrollmentLine>,
    pub can_add: bool,
}

impl SlotDetails {
    pub fn build(state: &SchedulingState, slot_id: &str) -> ScheduleResult<Self> {
        let slot = state
            .slot(slot_id)
            .ok_or_else(|| ScheduleError::NotFound(format!("Time slot '{}' not found", slot_id)))?;

        Ok(Self {
            slot_id: slot.id.clone(),
            title: format!("{} at {}", slot.day, slot.time),
            filled: slot.filled(),
            capacity: slot.capacity,
            level: CapacityLevel::for_slot(slot),
            students: slot
                .students
                .iter()
                .map(|s| EnrollmentLine {
                    student_id: s.id.clone(),
                    name: s.name.clone(),
                    booking_type: s.booking_type,
                })
                .collect(),
            can_add: !slot.is_full(),
        })
    }

    pub fn capacity_line(&self) -> String {
        format!("Capacity: {} / {} students", self.filled, self.capacity)
    }
}
