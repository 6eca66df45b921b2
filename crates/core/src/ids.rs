//! Session-unique ids for enrollment records the store synthesizes.

use uuid::Uuid;

/// Prefix for records created by a makeup booking.
pub const MAKEUP_ID_PREFIX: &str = "makeup";
/// Prefix for records created by a recurring reschedule.
pub const RECURRING_ID_PREFIX: &str = "recurring";
/// Prefix for records created from the admin add form.
pub const STUDENT_ID_PREFIX: &str = "student";

/// Source of fresh enrollment ids.
///
/// Implementations must never hand out the same id twice within a session.
pub trait IdGenerator {
    fn next_id(&mut self, prefix: &str) -> String;
}

/// `prefix-<uuid v4>` ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self, prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::new_v4())
    }
}

/// `prefix-1`, `prefix-2`, ... with one counter shared by every prefix.
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next += 1;
        format!("{}-{}", prefix, self.next)
    }
}
