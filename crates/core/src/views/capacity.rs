use std::fmt;

use crate::models::TimeSlot;

/// Fill percentage at which a slot counts as nearly full.
pub const FILLING_THRESHOLD_PERCENT: usize = 80;

/// How full a slot looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLevel {
    Open,
    Filling,
    Full,
}

impl CapacityLevel {
    pub fn of(filled: usize, capacity: usize) -> Self {
        if capacity == 0 || filled >= capacity {
            return Self::Full;
        }
        if filled * 100 >= capacity * FILLING_THRESHOLD_PERCENT {
            Self::Filling
        } else {
            Self::Open
        }
    }

    pub fn for_slot(slot: &TimeSlot) -> Self {
        Self::of(slot.filled(), slot.capacity)
    }
}

/// Short availability note shown on a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Full,
    /// One or two spots remain
    FewLeft(usize),
    Open(usize),
}

impl Availability {
    pub fn for_slot(slot: &TimeSlot) -> Self {
        match slot.spots_open() {
            0 => Self::Full,
            n @ 1..=2 => Self::FewLeft(n),
            n => Self::Open(n),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("Full"),
            Self::FewLeft(1) => f.write_str("1 Spot Left!"),
            Self::FewLeft(n) => write!(f, "{} Spots Left!", n),
            Self::Open(n) => write!(f, "{} Open", n),
        }
    }
}

/// `filled/capacity`, e.g. `3/5`.
pub fn fill_label(filled: usize, capacity: usize) -> String {
    format!("{}/{}", filled, capacity)
}
