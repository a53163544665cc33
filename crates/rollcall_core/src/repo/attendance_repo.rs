//! Attendance repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide upsert-by-(student, date) and point lookup over attendance marks.
//! - Keep the per-student index consistent with the record set.
//!
//! # Invariants
//! - At most one record per `(student_id, date)`; a second write to the same
//!   key overwrites `status` in place and keeps the record id.
//! - Unknown student ids are accepted; referential checks belong to callers.
//! - Records are never removed, so index positions stay valid.

use crate::model::attendance::{AttendanceRecord, AttendanceStatus, RecordId};
use crate::model::student::StudentId;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Result of one upsert against the record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No record existed for the key; a new one was appended.
    Inserted(RecordId),
    /// An existing record was overwritten. `previous` may equal the new status.
    Updated {
        id: RecordId,
        previous: AttendanceStatus,
    },
}

impl UpsertOutcome {
    pub fn record_id(self) -> RecordId {
        match self {
            Self::Inserted(id) => id,
            Self::Updated { id, .. } => id,
        }
    }
}

/// Repository interface for attendance marks.
pub trait AttendanceRepository {
    /// Inserts or overwrites the status for `(student_id, date)`.
    fn upsert_status(
        &mut self,
        student_id: &StudentId,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> UpsertOutcome;
    /// Imports a pre-built record, keeping its id when the key is new.
    fn import_record(&mut self, record: AttendanceRecord) -> UpsertOutcome;
    /// Returns the status recorded for `(student_id, date)`, if any.
    fn get_status(&self, student_id: &StudentId, date: NaiveDate) -> Option<AttendanceStatus>;
    /// Returns one student's records in insertion order.
    fn records_for_student(&self, student_id: &StudentId) -> Vec<AttendanceRecord>;
    /// Returns every record in insertion order.
    fn list_records(&self) -> Vec<AttendanceRecord>;
}

/// Derived mapping from student id to positions in the record set.
///
/// A query convenience only; the record vector is the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceIndex {
    by_student: HashMap<StudentId, Vec<usize>>,
}

impl AttendanceIndex {
    /// Rebuilds the index from scratch.
    pub fn build(records: &[AttendanceRecord]) -> Self {
        let mut index = Self::default();
        for (position, record) in records.iter().enumerate() {
            index.push(&record.student_id, position);
        }
        index
    }

    fn push(&mut self, student_id: &StudentId, position: usize) {
        self.by_student
            .entry(student_id.clone())
            .or_default()
            .push(position);
    }

    /// Positions of one student's records, in insertion order.
    pub fn positions(&self, student_id: &StudentId) -> &[usize] {
        self.by_student
            .get(student_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of students with at least one record.
    pub fn student_count(&self) -> usize {
        self.by_student.len()
    }
}

/// Session-owned attendance store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendanceRepository {
    records: Vec<AttendanceRecord>,
    index: AttendanceIndex,
}

impl InMemoryAttendanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records.
    ///
    /// Later duplicates of a `(student_id, date)` key overwrite the status of
    /// the first occurrence, so the uniqueness invariant holds on load.
    pub fn from_records(records: impl IntoIterator<Item = AttendanceRecord>) -> Self {
        let mut repo = Self::new();
        for record in records {
            repo.import_record(record);
        }
        debug_assert_eq!(repo.index, AttendanceIndex::build(&repo.records));
        repo
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn index(&self) -> &AttendanceIndex {
        &self.index
    }

    fn find_position(&self, student_id: &StudentId, date: NaiveDate) -> Option<usize> {
        self.index
            .positions(student_id)
            .iter()
            .copied()
            .find(|&position| self.records[position].date == date)
    }

    fn append(&mut self, record: AttendanceRecord) -> RecordId {
        let id = record.id;
        self.index.push(&record.student_id, self.records.len());
        self.records.push(record);
        id
    }

    fn overwrite(&mut self, position: usize, status: AttendanceStatus) -> UpsertOutcome {
        let record = &mut self.records[position];
        let previous = record.status;
        record.status = status;
        UpsertOutcome::Updated {
            id: record.id,
            previous,
        }
    }
}

impl AttendanceRepository for InMemoryAttendanceRepository {
    fn upsert_status(
        &mut self,
        student_id: &StudentId,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> UpsertOutcome {
        match self.find_position(student_id, date) {
            Some(position) => self.overwrite(position, status),
            None => UpsertOutcome::Inserted(self.append(AttendanceRecord::new(
                student_id.clone(),
                date,
                status,
            ))),
        }
    }

    fn import_record(&mut self, record: AttendanceRecord) -> UpsertOutcome {
        match self.find_position(&record.student_id, record.date) {
            Some(position) => self.overwrite(position, record.status),
            None => UpsertOutcome::Inserted(self.append(record)),
        }
    }

    fn get_status(&self, student_id: &StudentId, date: NaiveDate) -> Option<AttendanceStatus> {
        self.find_position(student_id, date)
            .map(|position| self.records[position].status)
    }

    fn records_for_student(&self, student_id: &StudentId) -> Vec<AttendanceRecord> {
        self.index
            .positions(student_id)
            .iter()
            .map(|&position| self.records[position].clone())
            .collect()
    }

    fn list_records(&self) -> Vec<AttendanceRecord> {
        self.records.clone()
    }
}
