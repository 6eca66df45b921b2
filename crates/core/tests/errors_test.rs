use std::error::Error;

use lessonbook_core::errors::{ScheduleError, ScheduleResult};

#[test]
fn test_schedule_error_display() {
    let not_found = ScheduleError::NotFound("Time slot 'sat-9am' not found".to_string());
    let validation = ScheduleError::Validation("Student name must not be empty".to_string());
    let full = ScheduleError::SlotFull("Tuesday at 5:00 PM".to_string());
    let unknown = ScheduleError::UnknownCommand("dance".to_string());
    let internal = ScheduleError::Internal(eyre::eyre!("snapshot encoding failed"));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Time slot 'sat-9am' not found"
    );
    assert_eq!(
        validation.to_string(),
        "Validation error: Student name must not be empty"
    );
    assert_eq!(full.to_string(), "Slot is full: Tuesday at 5:00 PM");
    assert_eq!(unknown.to_string(), "Unknown command: dance");
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_eyre_conversion() {
    let report = eyre::eyre!("boom");
    let error: ScheduleError = report.into();

    assert!(matches!(error, ScheduleError::Internal(_)));
    assert!(error.to_string().contains("boom"));
}

#[test]
fn test_plain_variants_have_no_source() {
    let error = ScheduleError::NotFound("x".to_string());
    assert!(error.source().is_none());
}

#[test]
fn test_schedule_result() {
    let result: ScheduleResult<usize> = Ok(5);
    assert_eq!(result.unwrap(), 5);

    let result: ScheduleResult<usize> = Err(ScheduleError::SlotFull("mon-3pm".to_string()));
    assert!(result.is_err());
}
