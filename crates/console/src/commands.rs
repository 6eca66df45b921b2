use lessonbook_core::{
    errors::{ScheduleError, ScheduleResult},
    models::BookingType,
};

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Admin weekly grid
    Grid,
    /// Admin detail view for one slot
    Slot { slot_id: String },
    Add {
        slot_id: String,
        booking_type: BookingType,
        name: String,
    },
    Remove { slot_id: String, student_id: String },
    /// Student's recurring schedule
    MySchedule,
    /// Slots open for a makeup lesson
    Makeup,
    Book { slot_id: String },
    Reschedule { new_slot_id: String },
    Snapshot,
    Quit,
}

/// Usage lines shown by `help`.
pub const USAGE: &[(&str, &str)] = &[
    ("grid", "Show the weekly grid of lesson slots"),
    ("slot <slot-id>", "Show the students enrolled in a slot"),
    (
        "add <slot-id> <recurring|makeup|intro> <name>",
        "Enroll a student in a slot",
    ),
    ("remove <slot-id> <student-id>", "Remove a student from a slot"),
    ("me", "Show your recurring schedule"),
    ("makeup", "List slots available for a makeup lesson"),
    ("book <slot-id>", "Book a makeup lesson"),
    ("reschedule <slot-id>", "Move your recurring lesson to another slot"),
    ("snapshot", "Print the current state as JSON"),
    ("help", "Show this help"),
    ("quit", "End the session"),
];

fn required<'a>(arg: Option<&'a str>, what: &str, usage: &str) -> ScheduleResult<&'a str> {
    arg.ok_or_else(|| ScheduleError::Validation(format!("Missing {}. Usage: {}", what, usage)))
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> ScheduleResult<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "grid" => Command::Grid,
        "slot" => Command::Slot {
            slot_id: required(words.next(), "slot id", "slot <slot-id>")?.to_string(),
        },
        "add" => {
            let usage = "add <slot-id> <recurring|makeup|intro> <name>";
            let slot_id = required(words.next(), "slot id", usage)?.to_string();
            let booking_type = required(words.next(), "booking type", usage)?.parse::<BookingType>()?;
            let name = words.collect::<Vec<_>>().join(" ");
            Command::Add {
                slot_id,
                booking_type,
                name,
            }
        }
        "remove" => {
            let usage = "remove <slot-id> <student-id>";
            Command::Remove {
                slot_id: required(words.next(), "slot id", usage)?.to_string(),
                student_id: required(words.next(), "student id", usage)?.to_string(),
            }
        }
        "me" | "schedule" => Command::MySchedule,
        "makeup" => Command::Makeup,
        "book" => Command::Book {
            slot_id: required(words.next(), "slot id", "book <slot-id>")?.to_string(),
        },
        "reschedule" => Command::Reschedule {
            new_slot_id: required(words.next(), "slot id", "reschedule <slot-id>")?.to_string(),
        },
        "snapshot" => Command::Snapshot,
        "quit" | "exit" => Command::Quit,
        other => return Err(ScheduleError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}
