//! Fixed seed data loaded once when a session starts.

use crate::models::{BookingType, CurrentStudent, SchedulingState, Student, TimeSlot};

/// Grid columns.
pub const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
/// Grid rows.
pub const TIMES: [&str; 6] = [
    "3:00 PM", "4:00 PM", "5:00 PM", "6:00 PM", "7:00 PM", "8:00 PM",
];

pub const DEFAULT_CAPACITY: usize = 5;

pub const CURRENT_STUDENT_ID: &str = "current-student";
pub const CURRENT_STUDENT_NAME: &str = "Alex Thompson";
pub const CURRENT_STUDENT_SLOT: &str = "mon-3pm";

fn slot(id: &str, day: &str, time: &str, students: &[(&str, &str, BookingType)]) -> TimeSlot {
    TimeSlot::new(id, day, time, DEFAULT_CAPACITY).with_students(
        students
            .iter()
            .map(|(id, name, booking_type)| Student::new(*id, *name, *booking_type))
            .collect(),
    )
}

pub fn seed_time_slots() -> Vec<TimeSlot> {
    use BookingType::{Intro, Makeup, Recurring};

    vec![
        slot(
            "mon-3pm",
            "Monday",
            "3:00 PM",
            &[("s1", "Emma Wilson", Recurring), ("s2", "Liam Brown", Recurring)],
        ),
        slot(
            "mon-4pm",
            "Monday",
            "4:00 PM",
            &[
                ("s3", "Olivia Davis", Recurring),
                ("s4", "Noah Miller", Recurring),
                ("s5", "Ava Garcia", Intro),
            ],
        ),
        slot(
            "mon-5pm",
            "Monday",
            "5:00 PM",
            &[
                ("s8", "Isabella Anderson", Recurring),
                ("s9", "Mason Thomas", Makeup),
            ],
        ),
        slot("mon-6pm", "Monday", "6:00 PM", &[]),
        slot(
            "tue-3pm",
            "Tuesday",
            "3:00 PM",
            &[
                ("s28", "Grace Martinez", Recurring),
                ("s29", "William Garcia", Recurring),
            ],
        ),
        slot(
            "tue-4pm",
            "Tuesday",
            "4:00 PM",
            &[
                ("s10", "Mia Jackson", Recurring),
                ("s11", "Lucas White", Recurring),
                ("s12", "Charlotte Harris", Intro),
                ("s13", "Elijah Martin", Recurring),
            ],
        ),
        slot(
            "tue-5pm",
            "Tuesday",
            "5:00 PM",
            &[
                ("s14", "Amelia Thompson", Recurring),
                ("s15", "James Lee", Recurring),
                ("s16", "Harper Walker", Makeup),
                ("s17", "Benjamin Hall", Recurring),
                ("s18", "Evelyn Allen", Recurring),
            ],
        ),
        slot(
            "wed-3pm",
            "Wednesday",
            "3:00 PM",
            &[("s30", "Henry Wilson", Recurring)],
        ),
        slot("wed-4pm", "Wednesday", "4:00 PM", &[]),
        slot(
            "wed-5pm",
            "Wednesday",
            "5:00 PM",
            &[("s31", "Luna Davis", Makeup)],
        ),
        slot(
            "thu-4pm",
            "Thursday",
            "4:00 PM",
            &[
                ("s20", "Alexander King", Recurring),
                ("s21", "Emily Wright", Intro),
                ("s22", "Michael Scott", Recurring),
            ],
        ),
        slot(
            "thu-5pm",
            "Thursday",
            "5:00 PM",
            &[
                ("s23", "Elizabeth Lopez", Recurring),
                ("s24", "Daniel Hill", Makeup),
            ],
        ),
        slot(
            "thu-6pm",
            "Thursday",
            "6:00 PM",
            &[
                ("s32", "Aria Brown", Recurring),
                ("s33", "Jack Robinson", Recurring),
                ("s34", "Lily Clark", Makeup),
                ("s35", "Owen Lewis", Intro),
            ],
        ),
        slot(
            "fri-3pm",
            "Friday",
            "3:00 PM",
            &[
                ("s25", "Sofia Green", Recurring),
                ("s26", "Matthew Adams", Recurring),
                ("s27", "Avery Baker", Makeup),
            ],
        ),
        slot(
            "fri-4pm",
            "Friday",
            "4:00 PM",
            &[("s36", "Zoe Martinez", Recurring)],
        ),
    ]
}

pub fn seed_current_student() -> CurrentStudent {
    CurrentStudent {
        id: CURRENT_STUDENT_ID.to_string(),
        name: CURRENT_STUDENT_NAME.to_string(),
        recurring_slot: Some(CURRENT_STUDENT_SLOT.to_string()),
    }
}

pub fn seed_state() -> SchedulingState {
    SchedulingState {
        time_slots: seed_time_slots(),
        current_student: seed_current_student(),
    }
}
