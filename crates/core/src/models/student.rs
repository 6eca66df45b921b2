use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

/// Why a student occupies a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    /// Standing weekly booking
    Recurring,
    /// One-off replacement for a missed recurring lesson
    Makeup,
    /// Trial or first lesson
    Intro,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recurring => "recurring",
            Self::Makeup => "makeup",
            Self::Intro => "intro",
        }
    }

    /// Display label, e.g. `Recurring`
    pub fn label(&self) -> &'static str {
        match self {
            Self::Recurring => "Recurring",
            Self::Makeup => "Makeup",
            Self::Intro => "Intro",
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingType {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recurring" => Ok(Self::Recurring),
            "makeup" => Ok(Self::Makeup),
            "intro" => Ok(Self::Intro),
            other => Err(ScheduleError::Validation(format!(
                "Unknown booking type '{}', expected recurring, makeup or intro",
                other
            ))),
        }
    }
}

/// An enrollment record. Owned by the slot it is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub booking_type: BookingType,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, booking_type: BookingType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            booking_type,
        }
    }
}
