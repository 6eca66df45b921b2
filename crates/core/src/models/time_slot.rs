use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::student::Student;

/// Format of time-of-day labels such as `3:00 PM`.
pub const TIME_LABEL_FORMAT: &str = "%I:%M %p";

/// A fixed (day, time) teaching unit.
///
/// `students.len() <= capacity` holds for every slot reachable from a store
/// snapshot; the reducer is the only writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub day: String,
    pub time: String,
    pub students: Vec<Student>,
    pub capacity: usize,
}

impl TimeSlot {
    pub fn new(
        id: impl Into<String>,
        day: impl Into<String>,
        time: impl Into<String>,
        capacity: usize,
    ) -> Self {
        Self {
            id: id.into(),
            day: day.into(),
            time: time.into(),
            students: Vec::new(),
            capacity,
        }
    }

    pub fn with_students(mut self, students: Vec<Student>) -> Self {
        self.students = students;
        self
    }

    pub fn filled(&self) -> usize {
        self.students.len()
    }

    pub fn is_full(&self) -> bool {
        self.students.len() >= self.capacity
    }

    pub fn spots_open(&self) -> usize {
        self.capacity.saturating_sub(self.students.len())
    }

    /// Parses the day label (`Monday`, `tue`, ...) into a weekday.
    pub fn weekday(&self) -> Option<Weekday> {
        self.day.parse().ok()
    }

    /// Parses the time label (`3:00 PM`) into a time of day.
    pub fn start_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.time.trim(), TIME_LABEL_FORMAT).ok()
    }

    /// First three letters of the day label, as shown in grid cells.
    pub fn short_day(&self) -> &str {
        self.day.get(..3).unwrap_or(self.day.as_str())
    }
}
