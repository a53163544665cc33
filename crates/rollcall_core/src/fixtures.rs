//! Deterministic seed data for demo sessions and tests.
//!
//! # Invariants
//! - Student ids are the literals `"1"` through `"5"`.
//! - Seeded attendance dates are distinct and strictly increasing, ending at
//!   the caller-provided anchor day.

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::student::{Course, Student, StudentId};
use chrono::{Days, NaiveDate};

const SEED_STUDENTS: [(&str, &str, &str, Course, (i32, u32, u32)); 5] = [
    ("1", "Alice Silva", "alice@example.com", Course::Karate, (2023, 1, 15)),
    ("2", "Bruno Costa", "bruno@example.com", Course::Capoeira, (2023, 2, 20)),
    ("3", "Carla Dias", "carla@example.com", Course::JiuJitsu, (2023, 3, 10)),
    ("4", "Daniel Faria", "daniel@example.com", Course::Karate, (2023, 4, 5)),
    ("5", "Elena Moraes", "elena@example.com", Course::Capoeira, (2023, 5, 25)),
];

const SEED_MARKS: [(&str, AttendanceStatus); 7] = [
    ("1", AttendanceStatus::Present),
    ("2", AttendanceStatus::Absent),
    ("3", AttendanceStatus::Late),
    ("1", AttendanceStatus::Present),
    ("2", AttendanceStatus::Present),
    ("4", AttendanceStatus::Present),
    ("5", AttendanceStatus::Absent),
];

/// Returns the five fixture students in registration order.
pub fn seed_students() -> Vec<Student> {
    SEED_STUDENTS
        .iter()
        .filter_map(|&(id, name, contact, course, (year, month, day))| {
            Some(Student {
                id: StudentId::from(id),
                name: name.to_string(),
                contact: contact.to_string(),
                course,
                registration_date: NaiveDate::from_ymd_opt(year, month, day)?,
            })
        })
        .collect()
}

/// Returns seven attendance records on consecutive days ending at `anchor`.
///
/// Record ids are freshly generated on every call.
pub fn seed_attendance(anchor: NaiveDate) -> Vec<AttendanceRecord> {
    let last = SEED_MARKS.len() as u64 - 1;
    SEED_MARKS
        .iter()
        .enumerate()
        .filter_map(|(offset, &(student_id, status))| {
            let date = anchor.checked_sub_days(Days::new(last - offset as u64))?;
            Some(AttendanceRecord::new(
                StudentId::from(student_id),
                date,
                status,
            ))
        })
        .collect()
}
