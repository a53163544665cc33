//! Attendance domain model.
//!
//! # Responsibility
//! - Define the per-session attendance record and its status values.
//! - Own the canonical `YYYY-MM-DD` session date representation.
//!
//! # Invariants
//! - At most one record exists per `(student_id, date)` pair in a store.
//! - `id` is stable across status overwrites of the same record.
//! - Records keep only the `student_id` reference; display fields are joined
//!   on read.

use crate::model::student::StudentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Canonical text form of a session date.
pub const SESSION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Stable identifier of one attendance record.
pub type RecordId = Uuid;

/// Attendance outcome for one student in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    /// All statuses in summary display order.
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
        }
    }

    /// Parses a status name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(needle))
    }

    /// Whether the student showed up for the session.
    pub fn is_attended(self) -> bool {
        matches!(self, Self::Present | Self::Late)
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// One attendance mark, stored normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub student_id: StudentId,
    /// Session day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Creates a record with a freshly generated id.
    pub fn new(student_id: StudentId, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            date,
            status,
        }
    }

    /// Whether this record belongs to the `(student_id, date)` key.
    pub fn matches_key(&self, student_id: &StudentId, date: NaiveDate) -> bool {
        &self.student_id == student_id && self.date == date
    }
}

/// Parses a session date in strict `YYYY-MM-DD` form.
///
/// Inputs that chrono would accept but that are not in canonical form
/// (for example `2024-5-1`) are rejected.
pub fn parse_session_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date = NaiveDate::parse_from_str(trimmed, SESSION_DATE_FORMAT).ok()?;
    // Why: chrono accepts unpadded fields, which would let `2024-5-1` and
    // `2024-05-01` name one key through two spellings.
    if format_session_date(date) != trimmed {
        return None;
    }
    Some(date)
}

/// Formats a session date in canonical `YYYY-MM-DD` form.
pub fn format_session_date(date: NaiveDate) -> String {
    date.format(SESSION_DATE_FORMAT).to_string()
}
