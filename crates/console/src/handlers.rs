use lessonbook_core::{
    errors::{ScheduleError, ScheduleResult},
    ids::STUDENT_ID_PREFIX,
    models::{BookingType, SchedulingState, Student, TimeSlot},
    store::{Action, SchedulingStore},
    views::{MySchedule, SlotDetails, WeeklyGrid, student::makeup_options},
};
use tracing::info;

use crate::{commands::Command, render};

/// What the session loop does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

fn find_slot<'a>(state: &'a SchedulingState, slot_id: &str) -> ScheduleResult<&'a TimeSlot> {
    state
        .slot(slot_id)
        .ok_or_else(|| ScheduleError::NotFound(format!("Time slot '{}' not found", slot_id)))
}

fn ensure_room(slot: &TimeSlot) -> ScheduleResult<()> {
    if slot.is_full() {
        return Err(ScheduleError::SlotFull(format!("{} at {}", slot.day, slot.time)));
    }
    Ok(())
}

/// Runs one command against the store.
///
/// Actions the store would silently ignore (unknown slot, full slot, empty
/// name) are refused here with an error instead, so the user gets feedback.
pub fn handle_command(store: &mut SchedulingStore, command: Command) -> ScheduleResult<Outcome> {
    let reply = match command {
        Command::Help => render::render_help(),
        Command::Grid => {
            let snapshot = store.snapshot();
            render::render_grid(&WeeklyGrid::build(&snapshot), &WeeklyGrid::off_grid(&snapshot))
        }
        Command::Slot { slot_id } => {
            render::render_slot_details(&SlotDetails::build(&store.snapshot(), &slot_id)?)
        }
        Command::Add {
            slot_id,
            booking_type,
            name,
        } => handle_add(store, &slot_id, booking_type, &name)?,
        Command::Remove {
            slot_id,
            student_id,
        } => handle_remove(store, &slot_id, &student_id)?,
        Command::MySchedule => render::render_my_schedule(&MySchedule::build(&store.snapshot())),
        Command::Makeup => render::render_makeup_options(&makeup_options(&store.snapshot())),
        Command::Book { slot_id } => handle_book(store, &slot_id)?,
        Command::Reschedule { new_slot_id } => handle_reschedule(store, &new_slot_id)?,
        Command::Snapshot => {
            serde_json::to_string_pretty(&*store.snapshot()).map_err(eyre::Report::from)?
        }
        Command::Quit => return Ok(Outcome::Quit),
    };

    Ok(Outcome::Reply(reply))
}

fn handle_add(
    store: &mut SchedulingStore,
    slot_id: &str,
    booking_type: BookingType,
    name: &str,
) -> ScheduleResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScheduleError::Validation(
            "Student name must not be empty".to_string(),
        ));
    }

    let snapshot = store.snapshot();
    let slot = find_slot(&snapshot, slot_id)?;
    ensure_room(slot)?;

    let student = Student::new(store.next_id(STUDENT_ID_PREFIX), name, booking_type);
    let student_id = student.id.clone();
    store.add_student(slot_id, student);
    info!(slot_id, student_id = %student_id, "student added");

    Ok(format!(
        "Added {} ({}) to {} at {} as {}",
        name,
        booking_type.label(),
        slot.day,
        slot.time,
        student_id
    ))
}

fn handle_remove(store: &mut SchedulingStore, slot_id: &str, student_id: &str) -> ScheduleResult<String> {
    let snapshot = store.snapshot();
    let slot = find_slot(&snapshot, slot_id)?;
    let student = slot
        .students
        .iter()
        .find(|s| s.id == student_id)
        .ok_or_else(|| {
            ScheduleError::NotFound(format!("Student '{}' not found in {}", student_id, slot_id))
        })?;

    store.remove_student(slot_id, student_id);
    info!(slot_id, student_id, "student removed");

    Ok(format!("Removed {} from {} at {}", student.name, slot.day, slot.time))
}

fn handle_book(store: &mut SchedulingStore, slot_id: &str) -> ScheduleResult<String> {
    let snapshot = store.snapshot();
    let slot = find_slot(&snapshot, slot_id)?;
    ensure_room(slot)?;

    store.book_makeup(slot_id, &snapshot.current_student.name);
    info!(slot_id, student = %snapshot.current_student.name, "makeup booked");

    Ok(format!(
        "Makeup Lesson Booked! Your makeup lesson is scheduled for {} at {}",
        slot.day, slot.time
    ))
}

fn handle_reschedule(store: &mut SchedulingStore, new_slot_id: &str) -> ScheduleResult<String> {
    let snapshot = store.snapshot();
    let current = &snapshot.current_student;
    let slot = find_slot(&snapshot, new_slot_id)?;

    if current.recurring_slot.as_deref() == Some(new_slot_id) {
        return Err(ScheduleError::Validation(format!(
            "{} is already your recurring slot",
            new_slot_id
        )));
    }
    ensure_room(slot)?;

    store.dispatch(Action::RescheduleRecurring {
        old_slot_id: current.recurring_slot.clone(),
        new_slot_id: new_slot_id.to_string(),
        student_name: current.name.clone(),
    });
    info!(
        old_slot_id = ?current.recurring_slot,
        new_slot_id,
        student = %current.name,
        "recurring lesson rescheduled"
    );

    Ok(format!(
        "Recurring lesson moved to {} at {}",
        slot.day, slot.time
    ))
}
