use serde::{Deserialize, Serialize};

use super::time_slot::TimeSlot;

/// The session's active student.
///
/// `recurring_slot` is a lookup-only reference by slot id. Nothing clears it
/// when the matching enrollment disappears, so it may dangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentStudent {
    pub id: String,
    pub name: String,
    pub recurring_slot: Option<String>,
}

/// One immutable snapshot of the scheduling store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingState {
    pub time_slots: Vec<TimeSlot>,
    pub current_student: CurrentStudent,
}

impl SchedulingState {
    pub fn slot(&self, slot_id: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|slot| slot.id == slot_id)
    }

    pub fn slot_at(&self, day: &str, time: &str) -> Option<&TimeSlot> {
        self.time_slots
            .iter()
            .find(|slot| slot.day == day && slot.time == time)
    }

    /// Resolves the current student's recurring slot, if it is set and exists.
    pub fn recurring_slot(&self) -> Option<&TimeSlot> {
        self.current_student
            .recurring_slot
            .as_deref()
            .and_then(|id| self.slot(id))
    }
}
