//! # Scheduling Store
//!
//! The store owns the authoritative [`SchedulingState`] for a session and
//! applies the four scheduling actions to it.
//!
//! Every transition goes through [`reduce`], which derives a new state from the
//! previous one without touching it. The store then publishes the result as a
//! fresh `Arc` snapshot, so a reader holding an older snapshot never sees a
//! later or half-applied transition.
//!
//! None of the operations fail. Unknown slots, full slots and unknown students
//! are logged at `debug` and leave the affected part of the state unchanged.

use std::sync::Arc;

use tracing::debug;

use crate::{
    ids::{IdGenerator, MAKEUP_ID_PREFIX, RECURRING_ID_PREFIX},
    models::{BookingType, SchedulingState, Student},
    seed,
};

/// A state transition the store understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddStudent {
        slot_id: String,
        student: Student,
    },
    RemoveStudent {
        slot_id: String,
        student_id: String,
    },
    BookMakeup {
        slot_id: String,
        student_name: String,
    },
    /// `old_slot_id` is `None` when the student has no recurring slot yet;
    /// the removal step is then skipped.
    RescheduleRecurring {
        old_slot_id: Option<String>,
        new_slot_id: String,
        student_name: String,
    },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddStudent { .. } => "add_student",
            Self::RemoveStudent { .. } => "remove_student",
            Self::BookMakeup { .. } => "book_makeup",
            Self::RescheduleRecurring { .. } => "reschedule_recurring",
        }
    }
}

/// Appends `student` to the slot if it exists and has room.
fn append_guarded(state: &mut SchedulingState, slot_id: &str, student: Student) -> bool {
    let Some(slot) = state.time_slots.iter_mut().find(|slot| slot.id == slot_id) else {
        debug!(slot_id, "append skipped: unknown slot");
        return false;
    };

    if slot.is_full() {
        debug!(
            slot_id,
            filled = slot.filled(),
            capacity = slot.capacity,
            "append skipped: slot is full"
        );
        return false;
    }

    debug!(slot_id, student_id = %student.id, booking_type = %student.booking_type, "student appended");
    slot.students.push(student);
    true
}

/// Removes the first enrollment in the slot accepted by `matches`.
fn remove_first(
    state: &mut SchedulingState,
    slot_id: &str,
    matches: impl Fn(&Student) -> bool,
) -> Option<Student> {
    let Some(slot) = state.time_slots.iter_mut().find(|slot| slot.id == slot_id) else {
        debug!(slot_id, "removal skipped: unknown slot");
        return None;
    };

    match slot.students.iter().position(|s| matches(s)) {
        Some(index) => Some(slot.students.remove(index)),
        None => {
            debug!(slot_id, "removal skipped: no matching student");
            None
        }
    }
}

/// Pure transition function.
///
/// Returns the state that results from applying `action` to `state`. The input
/// is never modified. `ids` is consulted for the records that `BookMakeup` and
/// `RescheduleRecurring` synthesize.
pub fn reduce(
    state: &SchedulingState,
    action: &Action,
    ids: &mut dyn IdGenerator,
) -> SchedulingState {
    let mut next = state.clone();

    match action {
        Action::AddStudent { slot_id, student } => {
            append_guarded(&mut next, slot_id, student.clone());
        }
        Action::RemoveStudent {
            slot_id,
            student_id,
        } => {
            remove_first(&mut next, slot_id, |s| s.id == *student_id);
        }
        Action::BookMakeup {
            slot_id,
            student_name,
        } => {
            let student = Student::new(
                ids.next_id(MAKEUP_ID_PREFIX),
                student_name.clone(),
                BookingType::Makeup,
            );
            append_guarded(&mut next, slot_id, student);
        }
        Action::RescheduleRecurring {
            old_slot_id,
            new_slot_id,
            student_name,
        } => {
            if let Some(old_slot_id) = old_slot_id {
                remove_first(&mut next, old_slot_id, |s| {
                    s.name == *student_name && s.booking_type == BookingType::Recurring
                });
            }

            let student = Student::new(
                ids.next_id(RECURRING_ID_PREFIX),
                student_name.clone(),
                BookingType::Recurring,
            );
            let enrolled = append_guarded(&mut next, new_slot_id, student);

            // The reference moves even when the destination refused the append.
            if !enrolled {
                debug!(
                    new_slot_id = %new_slot_id,
                    "recurring slot reference now points at a slot without a matching enrollment"
                );
            }
            next.current_student.recurring_slot = Some(new_slot_id.clone());
        }
    }

    next
}

/// Explicit state container for one session.
///
/// Owned by the application entry point and handed to consumers by reference.
pub struct SchedulingStore {
    state: Arc<SchedulingState>,
    version: u64,
    ids: Box<dyn IdGenerator>,
}

impl SchedulingStore {
    pub fn new(initial: SchedulingState, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            state: Arc::new(initial),
            version: 0,
            ids,
        }
    }

    /// A store holding the fixed seed data.
    pub fn seeded(ids: Box<dyn IdGenerator>) -> Self {
        Self::new(seed::seed_state(), ids)
    }

    /// The current snapshot. Later transitions never alter it.
    pub fn snapshot(&self) -> Arc<SchedulingState> {
        Arc::clone(&self.state)
    }

    /// Number of transitions that changed the state so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.state, &action, self.ids.as_mut());

        if next == *self.state {
            debug!(action = action.name(), version = self.version, "no-op transition");
            return;
        }

        debug_assert!(
            next.time_slots.iter().all(|slot| slot.filled() <= slot.capacity),
            "slot capacity exceeded"
        );

        self.state = Arc::new(next);
        self.version += 1;
        debug!(action = action.name(), version = self.version, "transition applied");
    }

    pub fn add_student(&mut self, slot_id: &str, student: Student) {
        self.dispatch(Action::AddStudent {
            slot_id: slot_id.to_string(),
            student,
        });
    }

    pub fn remove_student(&mut self, slot_id: &str, student_id: &str) {
        self.dispatch(Action::RemoveStudent {
            slot_id: slot_id.to_string(),
            student_id: student_id.to_string(),
        });
    }

    pub fn book_makeup(&mut self, slot_id: &str, student_name: &str) {
        self.dispatch(Action::BookMakeup {
            slot_id: slot_id.to_string(),
            student_name: student_name.to_string(),
        });
    }

    pub fn reschedule_recurring(&mut self, old_slot_id: &str, new_slot_id: &str, student_name: &str) {
        self.dispatch(Action::RescheduleRecurring {
            old_slot_id: Some(old_slot_id.to_string()),
            new_slot_id: new_slot_id.to_string(),
            student_name: student_name.to_string(),
        });
    }

    /// Generates an id with the store's generator, for callers that build a
    /// full [`Student`] before calling [`add_student`](Self::add_student).
    pub fn next_id(&mut self, prefix: &str) -> String {
        self.ids.next_id(prefix)
    }
}
