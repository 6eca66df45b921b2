use chrono::NaiveTime;

use super::capacity::{Availability, CapacityLevel};
use crate::{
    models::{SchedulingState, TimeSlot},
    seed::{DAYS, TIMES},
};

/// What a grid cell shows for an existing slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSummary {
    pub slot_id: String,
    pub short_day: String,
    pub filled: usize,
    pub capacity: usize,
    pub level: CapacityLevel,
    pub availability: Availability,
}

impl SlotSummary {
    pub fn from_slot(slot: &TimeSlot) -> Self {
        Self {
            slot_id: slot.id.clone(),
            short_day: slot.short_day().to_string(),
            filled: slot.filled(),
            capacity: slot.capacity,
            level: CapacityLevel::for_slot(slot),
            availability: Availability::for_slot(slot),
        }
    }

    pub fn is_full(&self) -> bool {
        self.level == CapacityLevel::Full
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// No lesson is offered at this day and time.
    Empty,
    Slot(SlotSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub time: String,
    pub cells: Vec<GridCell>,
}

/// Admin overview: one row per time label, one column per weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyGrid {
    pub days: Vec<String>,
    pub rows: Vec<GridRow>,
}

impl WeeklyGrid {
    pub fn build(state: &SchedulingState) -> Self {
        let rows = TIMES
            .iter()
            .map(|time| GridRow {
                time: time.to_string(),
                cells: DAYS
                    .iter()
                    .map(|day| match state.slot_at(day, time) {
                        Some(slot) => GridCell::Slot(SlotSummary::from_slot(slot)),
                        None => GridCell::Empty,
                    })
                    .collect(),
            })
            .collect();

        Self {
            days: DAYS.iter().map(|day| day.to_string()).collect(),
            rows,
        }
    }

    pub fn cell(&self, day: &str, time: &str) -> Option<&GridCell> {
        let column = self.days.iter().position(|d| d == day)?;
        self.rows
            .iter()
            .find(|row| row.time == time)
            .and_then(|row| row.cells.get(column))
    }

    /// Slots whose labels fall outside the fixed grid and so have no cell.
    pub fn off_grid<'a>(state: &'a SchedulingState) -> Vec<&'a TimeSlot> {
        state
            .time_slots
            .iter()
            .filter(|slot| {
                !DAYS.contains(&slot.day.as_str()) || !TIMES.contains(&slot.time.as_str())
            })
            .collect()
    }
}

/// Sorts slots chronologically by (weekday, start time).
///
/// Slots whose labels do not parse sort after all others, keeping their
/// relative order.
pub fn sort_chronologically(slots: &mut [&TimeSlot]) {
    fn key(slot: &TimeSlot) -> (u32, NaiveTime) {
        let day = slot
            .weekday()
            .map(|day| day.num_days_from_monday())
            .unwrap_or(u32::MAX);
        let time = slot.start_time().unwrap_or_default();
        (day, time)
    }

    slots.sort_by_key(|slot| key(slot));
}
