use crate::{
    models::{BookingType, SchedulingState, TimeSlot},
    views::{capacity::fill_label, grid::sort_chronologically},
};

/// Where the current student's recurring-slot reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurringSlotStatus {
    Unset,
    Resolved { slot_id: String, day: String, time: String },
    /// The reference names a slot id that does not exist.
    Dangling { slot_id: String },
}

/// The student's "My Recurring Schedule" panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MySchedule {
    pub student_name: String,
    pub status: RecurringSlotStatus,
    /// False when the referenced slot holds no recurring record under the
    /// student's name, e.g. after rescheduling into a full slot.
    pub enrolled: bool,
}

impl MySchedule {
    pub fn build(state: &SchedulingState) -> Self {
        let student = &state.current_student;
        let (status, enrolled) = match student.recurring_slot.as_deref() {
            None => (RecurringSlotStatus::Unset, false),
            Some(id) => match state.slot(id) {
                Some(slot) => (
                    RecurringSlotStatus::Resolved {
                        slot_id: slot.id.clone(),
                        day: slot.day.clone(),
                        time: slot.time.clone(),
                    },
                    slot.students
                        .iter()
                        .any(|s| s.name == student.name && s.booking_type == BookingType::Recurring),
                ),
                None => (
                    RecurringSlotStatus::Dangling {
                        slot_id: id.to_string(),
                    },
                    false,
                ),
            },
        };

        Self {
            student_name: student.name.clone(),
            status,
            enrolled,
        }
    }
}

/// A slot the student can still book a makeup lesson in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeupOption {
    pub slot_id: String,
    pub day: String,
    pub time: String,
    pub filled: usize,
    pub capacity: usize,
}

impl MakeupOption {
    fn from_slot(slot: &TimeSlot) -> Self {
        Self {
            slot_id: slot.id.clone(),
            day: slot.day.clone(),
            time: slot.time.clone(),
            filled: slot.filled(),
            capacity: slot.capacity,
        }
    }

    pub fn fill_line(&self) -> String {
        format!("{} filled", fill_label(self.filled, self.capacity))
    }
}

/// Every slot that is not at capacity, earliest in the week first.
pub fn makeup_options(state: &SchedulingState) -> Vec<MakeupOption> {
    let mut open: Vec<&TimeSlot> = state
        .time_slots
        .iter()
        .filter(|slot| !slot.is_full())
        .collect();
    sort_chronologically(&mut open);

    open.into_iter().map(MakeupOption::from_slot).collect()
}
