use thiserror::Error;

/// Errors raised around the scheduling store.
///
/// The store itself never fails: its operations are silent no-ops when a slot
/// is unknown or full. These variants are produced by lookups in the views and
/// by the console when it refuses an action before it reaches the store.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Slot is full: {0}")]
    SlotFull(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
