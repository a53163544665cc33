//! Dashboard headline numbers.

use crate::model::attendance::AttendanceRecord;
use crate::model::student::Student;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Headline numbers for the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub date: NaiveDate,
    pub total_students: usize,
    /// Distinct courses with at least one registered student.
    pub active_courses: usize,
    /// Percent (0-100, rounded down) of marks on `date` that are present or
    /// late. `None` when nobody was marked that day.
    pub attendance_rate: Option<u8>,
}

/// Computes dashboard numbers from roster and record snapshots.
pub fn compute_dashboard(
    students: &[Student],
    records: &[AttendanceRecord],
    date: NaiveDate,
) -> DashboardStats {
    let active_courses = students
        .iter()
        .map(|student| student.course)
        .collect::<BTreeSet<_>>()
        .len();

    let (marked, attended) = records
        .iter()
        .filter(|record| record.date == date)
        .fold((0usize, 0usize), |(marked, attended), record| {
            (marked + 1, attended + usize::from(record.status.is_attended()))
        });
    let attendance_rate = (marked > 0).then(|| (attended * 100 / marked) as u8);

    DashboardStats {
        date,
        total_students: students.len(),
        active_courses,
        attendance_rate,
    }
}
