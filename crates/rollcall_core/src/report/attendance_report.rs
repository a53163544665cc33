//! Read-side attendance projections.
//!
//! # Responsibility
//! - Join records to roster display fields (`enrich`).
//! - Apply optional name/course/status predicates (`filter`).
//! - Count records into the fixed status buckets (`summarize`).
//!
//! # Invariants
//! - All three functions are total and never mutate their inputs.
//! - `enrich` and `filter` preserve input order.
//! - Summary buckets are always `Present, Absent, Late`, zero counts included,
//!   and their sum equals the input length.

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::student::{Course, Student, StudentId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display name used when a record references an unknown student.
pub const UNKNOWN_STUDENT_NAME: &str = "Unknown";
/// Course label used when a record references an unknown student.
pub const NOT_APPLICABLE_COURSE: &str = "N/A";

/// Attendance record joined with its student's display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub record: AttendanceRecord,
    /// Student display name, or `UNKNOWN_STUDENT_NAME`.
    pub student_name: String,
    /// `None` when the student is unknown.
    pub course: Option<Course>,
}

impl EnrichedRecord {
    pub fn status(&self) -> AttendanceStatus {
        self.record.status
    }

    /// Course label, or `NOT_APPLICABLE_COURSE` for unknown students.
    pub fn course_label(&self) -> &'static str {
        self.course
            .map(Course::label)
            .unwrap_or(NOT_APPLICABLE_COURSE)
    }

    pub fn is_known_student(&self) -> bool {
        self.course.is_some()
    }
}

/// Optional report predicates. `None` is the "all" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    /// Case-insensitive substring of the student name. Empty matches all.
    pub name: Option<String>,
    pub course: Option<Course>,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceFilter {
    /// Filter with every predicate inactive.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.course = Some(course);
        self
    }

    pub fn with_status(mut self, status: AttendanceStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Number of predicates that can reject a record.
    pub fn active_predicates(&self) -> usize {
        usize::from(self.name_needle().is_some())
            + usize::from(self.course.is_some())
            + usize::from(self.status.is_some())
    }

    /// Whether one enriched record passes every active predicate.
    pub fn matches(&self, entry: &EnrichedRecord) -> bool {
        let name_match = self
            .name_needle()
            .map_or(true, |needle| entry.student_name.to_lowercase().contains(&needle));
        let course_match = self.course.map_or(true, |course| entry.course == Some(course));
        let status_match = self.status.map_or(true, |status| entry.status() == status);
        name_match && course_match && status_match
    }

    fn name_needle(&self) -> Option<String> {
        self.name
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(str::to_lowercase)
    }
}

/// Count of records in one status bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: AttendanceStatus,
    pub count: usize,
}

/// Three-bucket status summary in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    buckets: [StatusCount; 3],
}

impl AttendanceSummary {
    /// Counts statuses into the fixed buckets.
    pub fn from_statuses(statuses: impl IntoIterator<Item = AttendanceStatus>) -> Self {
        let mut buckets = AttendanceStatus::ALL.map(|status| StatusCount { status, count: 0 });
        for status in statuses {
            // ALL is exhaustive, so every status has a bucket.
            if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.status == status) {
                bucket.count += 1;
            }
        }
        Self { buckets }
    }

    /// Buckets in `Present, Absent, Late` order.
    pub fn buckets(&self) -> &[StatusCount] {
        &self.buckets
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        self.buckets
            .iter()
            .find(|bucket| bucket.status == status)
            .map_or(0, |bucket| bucket.count)
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Joins each record with its student's name and course.
///
/// Unknown student ids get `UNKNOWN_STUDENT_NAME` and no course. When the
/// roster repeats an id, the first entry wins.
pub fn enrich(records: &[AttendanceRecord], students: &[Student]) -> Vec<EnrichedRecord> {
    let mut by_id: HashMap<&StudentId, &Student> = HashMap::with_capacity(students.len());
    for student in students {
        // Why: a plain insert would let a later duplicate relabel history.
        by_id.entry(&student.id).or_insert(student);
    }

    records
        .iter()
        .map(|record| match by_id.get(&record.student_id) {
            Some(student) => EnrichedRecord {
                record: record.clone(),
                student_name: student.name.clone(),
                course: Some(student.course),
            },
            None => EnrichedRecord {
                record: record.clone(),
                student_name: UNKNOWN_STUDENT_NAME.to_string(),
                course: None,
            },
        })
        .collect()
}

/// Returns the records passing every active predicate, in input order.
pub fn filter(records: &[EnrichedRecord], predicates: &AttendanceFilter) -> Vec<EnrichedRecord> {
    records
        .iter()
        .filter(|entry| predicates.matches(entry))
        .cloned()
        .collect()
}

/// Counts records per status bucket.
pub fn summarize(records: &[EnrichedRecord]) -> AttendanceSummary {
    AttendanceSummary::from_statuses(records.iter().map(EnrichedRecord::status))
}
