use std::io::Cursor;

use lessonbook_console::{
    build_store,
    commands::Command,
    config::{ConsoleConfig, IdStrategy},
    handlers::{Outcome, handle_command},
    run_session,
};
use lessonbook_core::{
    errors::ScheduleError,
    ids::SequentialIdGenerator,
    models::{BookingType, TimeSlot},
    seed,
    store::SchedulingStore,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn config() -> ConsoleConfig {
    ConsoleConfig {
        id_strategy: IdStrategy::Sequential,
        ..ConsoleConfig::default()
    }
}

#[fixture]
fn store(config: ConsoleConfig) -> SchedulingStore {
    build_store(&config)
}

fn reply(store: &mut SchedulingStore, command: Command) -> String {
    match handle_command(store, command).expect("command succeeds") {
        Outcome::Reply(text) => text,
        Outcome::Quit => panic!("unexpected quit"),
    }
}

fn run(store: &mut SchedulingStore, config: &ConsoleConfig, script: &str) -> String {
    let mut output = Vec::new();
    run_session(store, config, Cursor::new(script), &mut output).expect("session runs");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn test_build_store_applies_identity_overrides() {
    let config = ConsoleConfig {
        student_id: Some("stu-7".to_string()),
        student_name: Some("Jordan Park".to_string()),
        ..ConsoleConfig::default()
    };

    let store = build_store(&config);
    let snapshot = store.snapshot();
    assert_eq!(snapshot.current_student.id, "stu-7");
    assert_eq!(snapshot.current_student.name, "Jordan Park");
    assert_eq!(
        snapshot.current_student.recurring_slot.as_deref(),
        Some("mon-3pm")
    );
}

#[rstest]
fn test_add_student_command(mut store: SchedulingStore) {
    let text = reply(
        &mut store,
        Command::Add {
            slot_id: "mon-3pm".to_string(),
            booking_type: BookingType::Intro,
            name: "  Test  ".to_string(),
        },
    );

    assert_eq!(text, "Added Test (Intro) to Monday at 3:00 PM as student-1");
    let snapshot = store.snapshot();
    let last = snapshot.slot("mon-3pm").unwrap().students.last().unwrap().clone();
    assert_eq!(last.name, "Test");
    assert_eq!(last.id, "student-1");
}

#[rstest]
#[case("tue-5pm", "Test", "Slot is full: Tuesday at 5:00 PM")]
#[case("mon-3pm", "   ", "Validation error: Student name must not be empty")]
#[case("sat-9am", "Test", "Resource not found: Time slot 'sat-9am' not found")]
fn test_add_student_refusals(
    mut store: SchedulingStore,
    #[case] slot_id: &str,
    #[case] name: &str,
    #[case] message: &str,
) {
    let err = handle_command(
        &mut store,
        Command::Add {
            slot_id: slot_id.to_string(),
            booking_type: BookingType::Recurring,
            name: name.to_string(),
        },
    )
    .unwrap_err();

    assert_eq!(err.to_string(), message);
    assert_eq!(store.version(), 0);
}

#[rstest]
fn test_remove_command(mut store: SchedulingStore) {
    let text = reply(
        &mut store,
        Command::Remove {
            slot_id: "mon-4pm".to_string(),
            student_id: "s5".to_string(),
        },
    );

    assert_eq!(text, "Removed Ava Garcia from Monday at 4:00 PM");
    let snapshot = store.snapshot();
    assert!(snapshot.slot("mon-4pm").unwrap().students.iter().all(|s| s.id != "s5"));
}

#[rstest]
fn test_remove_unknown_student(mut store: SchedulingStore) {
    let err = handle_command(
        &mut store,
        Command::Remove {
            slot_id: "mon-4pm".to_string(),
            student_id: "s99".to_string(),
        },
    )
    .unwrap_err();

    assert!(matches!(err, ScheduleError::NotFound(_)));
}

#[rstest]
fn test_book_makeup_command(mut store: SchedulingStore) {
    let text = reply(
        &mut store,
        Command::Book {
            slot_id: "wed-4pm".to_string(),
        },
    );

    assert_eq!(
        text,
        "Makeup Lesson Booked! Your makeup lesson is scheduled for Wednesday at 4:00 PM"
    );
    let snapshot = store.snapshot();
    let students = &snapshot.slot("wed-4pm").unwrap().students;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Alex Thompson");
    assert_eq!(students[0].booking_type, BookingType::Makeup);
}

#[rstest]
fn test_book_makeup_in_full_slot_is_refused(mut store: SchedulingStore) {
    let err = handle_command(
        &mut store,
        Command::Book {
            slot_id: "tue-5pm".to_string(),
        },
    )
    .unwrap_err();

    assert!(matches!(err, ScheduleError::SlotFull(_)));
}

#[rstest]
fn test_reschedule_command(mut store: SchedulingStore) {
    let text = reply(
        &mut store,
        Command::Reschedule {
            new_slot_id: "fri-4pm".to_string(),
        },
    );

    assert_eq!(text, "Recurring lesson moved to Friday at 4:00 PM");
    let snapshot = store.snapshot();
    assert_eq!(
        snapshot.current_student.recurring_slot.as_deref(),
        Some("fri-4pm")
    );
    assert_eq!(
        snapshot.slot("fri-4pm").unwrap().students.last().unwrap().name,
        "Alex Thompson"
    );
}

#[test]
fn test_reschedule_without_recurring_slot() {
    let mut state = seed::seed_state();
    state.current_student.recurring_slot = None;
    let before = state.clone();
    let mut store = SchedulingStore::new(state, Box::new(SequentialIdGenerator::new()));

    let text = reply(
        &mut store,
        Command::Reschedule {
            new_slot_id: "wed-4pm".to_string(),
        },
    );

    assert_eq!(text, "Recurring lesson moved to Wednesday at 4:00 PM");
    let snapshot = store.snapshot();
    assert_eq!(
        snapshot.current_student.recurring_slot.as_deref(),
        Some("wed-4pm")
    );
    assert_eq!(snapshot.slot("wed-4pm").unwrap().students[0].id, "recurring-1");
    for slot in before.time_slots.iter().filter(|slot| slot.id != "wed-4pm") {
        assert_eq!(snapshot.slot(&slot.id), Some(slot));
    }
}

#[rstest]
#[case("mon-3pm")]
#[case("tue-5pm")]
#[case("sun-9am")]
fn test_reschedule_refusals(mut store: SchedulingStore, #[case] new_slot_id: &str) {
    let result = handle_command(
        &mut store,
        Command::Reschedule {
            new_slot_id: new_slot_id.to_string(),
        },
    );

    assert!(result.is_err());
    assert_eq!(
        store.snapshot().current_student.recurring_slot.as_deref(),
        Some("mon-3pm")
    );
}

#[rstest]
fn test_views_render(mut store: SchedulingStore) {
    let grid = reply(&mut store, Command::Grid);
    assert!(grid.lines().next().unwrap().contains("Monday"));
    assert!(grid.contains("tue-5pm 5/5 Full"));
    assert!(grid.contains("wed-4pm 0/5 5 Open"));
    assert_eq!(grid.lines().count(), 7);

    let details = reply(
        &mut store,
        Command::Slot {
            slot_id: "wed-4pm".to_string(),
        },
    );
    assert_eq!(
        details,
        "Wednesday at 4:00 PM\nCapacity: 0 / 5 students\nNo students in this slot"
    );

    let me = reply(&mut store, Command::MySchedule);
    assert!(me.contains("Monday at 3:00 PM (mon-3pm)"));

    let makeup = reply(&mut store, Command::Makeup);
    assert!(makeup.starts_with("14 slots available"));
    assert!(!makeup.contains("tue-5pm"));
}

#[test]
fn test_grid_lists_slots_outside_the_grid() {
    let mut state = seed::seed_state();
    state
        .time_slots
        .push(TimeSlot::new("sat-10am", "Saturday", "10:00 AM", 5));
    let mut store = SchedulingStore::new(state, Box::new(SequentialIdGenerator::new()));

    let grid = reply(&mut store, Command::Grid);

    assert!(!grid.lines().next().unwrap().contains("Saturday"));
    assert!(grid.ends_with("Other slots:\n  sat-10am Saturday at 10:00 AM 0/5"));
}

#[rstest]
fn test_snapshot_command(mut store: SchedulingStore) {
    let text = reply(&mut store, Command::Snapshot);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["currentStudent"]["name"], "Alex Thompson");
    assert_eq!(value["timeSlots"].as_array().unwrap().len(), 15);
}

#[rstest]
fn test_quit_command(mut store: SchedulingStore) {
    assert_eq!(handle_command(&mut store, Command::Quit).unwrap(), Outcome::Quit);
}

#[test_log::test]
fn test_session_script() {
    let config = config();
    let mut store = build_store(&config);

    let output = run(
        &mut store,
        &config,
        "book wed-4pm\n\nbook tue-5pm\ndance\nslot wed-4pm\nquit\nbook wed-4pm\n",
    );

    assert!(output.starts_with("Lessonbook. Type 'help' for commands.\n> "));
    assert!(output.contains("Makeup Lesson Booked!"));
    assert!(output.contains("Error: Slot is full: Tuesday at 5:00 PM"));
    assert!(output.contains("Error: Unknown command: dance"));
    assert!(output.contains("makeup-1"));
    // Nothing after `quit` runs.
    assert_eq!(store.snapshot().slot("wed-4pm").unwrap().filled(), 1);
    assert_eq!(store.version(), 1);
}

#[test]
fn test_session_ends_at_end_of_input() {
    let config = ConsoleConfig {
        prompt: Some("$ ".to_string()),
        ..config()
    };
    let mut store = build_store(&config);

    let output = run(&mut store, &config, "help\n");

    assert!(output.contains("reschedule <slot-id>"));
    assert!(output.ends_with("$ "));
}
