//! Plain-text rendering of the core views.

use lessonbook_core::{
    models::TimeSlot,
    views::{
        GridCell, MakeupOption, MySchedule, RecurringSlotStatus, SlotDetails, WeeklyGrid,
        capacity::fill_label,
    },
};

use crate::commands::USAGE;

const TIME_COLUMN: usize = 9;
const CELL_WIDTH: usize = 26;

fn cell_text(cell: &GridCell) -> String {
    match cell {
        GridCell::Empty => "-".to_string(),
        GridCell::Slot(summary) => format!(
            "{} {} {}",
            summary.slot_id,
            fill_label(summary.filled, summary.capacity),
            summary.availability
        ),
    }
}

/// Renders the grid, followed by any slots whose labels have no grid cell.
pub fn render_grid(grid: &WeeklyGrid, off_grid: &[&TimeSlot]) -> String {
    let header: String = grid
        .days
        .iter()
        .map(|day| format!("{:<width$}", day, width = CELL_WIDTH))
        .collect();
    let mut out = format!("{:<width$}{}", "", header, width = TIME_COLUMN)
        .trim_end()
        .to_string();

    for row in &grid.rows {
        let cells: String = row
            .cells
            .iter()
            .map(|cell| format!("{:<width$}", cell_text(cell), width = CELL_WIDTH))
            .collect();
        let line = format!("{:<width$}{}", row.time, cells, width = TIME_COLUMN);
        out.push('\n');
        out.push_str(line.trim_end());
    }

    if !off_grid.is_empty() {
        out.push_str("\nOther slots:");
        for slot in off_grid {
            out.push_str(&format!(
                "\n  {} {} at {} {}",
                slot.id,
                slot.day,
                slot.time,
                fill_label(slot.filled(), slot.capacity)
            ));
        }
    }

    out
}

pub fn render_slot_details(details: &SlotDetails) -> String {
    let mut out = format!("{}\n{}", details.title, details.capacity_line());

    if details.students.is_empty() {
        out.push_str("\nNo students in this slot");
    }
    for student in &details.students {
        out.push_str(&format!(
            "\n  {:<12} {:<24} {}",
            student.student_id,
            student.name,
            student.booking_type.label()
        ));
    }
    if !details.can_add {
        out.push_str("\nSlot is full");
    }

    out
}

pub fn render_my_schedule(schedule: &MySchedule) -> String {
    let mut out = format!("My Recurring Schedule ({})", schedule.student_name);

    match &schedule.status {
        RecurringSlotStatus::Unset => {
            out.push_str("\nYou don't have a recurring slot scheduled yet.");
        }
        RecurringSlotStatus::Resolved { slot_id, day, time } => {
            out.push_str(&format!("\n{} at {} ({})", day, time, slot_id));
            if !schedule.enrolled {
                out.push_str("\nNot on the class list for this slot");
            }
        }
        RecurringSlotStatus::Dangling { slot_id } => {
            out.push_str(&format!("\nSlot '{}' no longer exists", slot_id));
        }
    }

    out
}

pub fn render_makeup_options(options: &[MakeupOption]) -> String {
    if options.is_empty() {
        return "No available slots at the moment".to_string();
    }

    let mut out = format!("{} slots available", options.len());
    for option in options {
        out.push_str(&format!(
            "\n  {:<10} {:<10} {:<9} {}",
            option.slot_id,
            option.day,
            option.time,
            option.fill_line()
        ));
    }
    out
}

pub fn render_help() -> String {
    USAGE
        .iter()
        .map(|(usage, description)| format!("  {:<46} {}", usage, description))
        .collect::<Vec<_>>()
        .join("\n")
}
