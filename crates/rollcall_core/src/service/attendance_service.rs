//! Attendance session service.
//!
//! # Responsibility
//! - Expose roster and attendance use-cases over repository implementations.
//! - Join, filter and summarize records on read.
//! - Emit metadata-only diagnostics for every state change.
//!
//! # Invariants
//! - `set_attendance` is an idempotent upsert keyed by `(student_id, date)`.
//! - Lookups and report queries are total; absence is `None` or an empty list.
//! - Only registration and the `_checked` variants return errors.

use crate::fixtures::{seed_attendance, seed_students};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::student::{NewStudent, Student, StudentId, StudentValidationError};
use crate::report::attendance_report::{
    enrich, filter, summarize, AttendanceFilter, AttendanceSummary, EnrichedRecord,
};
use crate::repo::attendance_repo::{
    AttendanceRepository, InMemoryAttendanceRepository, UpsertOutcome,
};
use crate::repo::student_repo::{InMemoryStudentRepository, RosterError, StudentRepository};
use crate::service::dashboard::{compute_dashboard, DashboardStats};
use chrono::{Local, NaiveDate};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for roster and boundary-checked attendance use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Registration input failed field rules.
    Validation(StudentValidationError),
    /// Roster rejected the write.
    Roster(RosterError),
    /// Referenced student is not in the roster.
    StudentNotFound(StudentId),
    /// Text is not a `YYYY-MM-DD` date.
    InvalidDate(String),
    /// Text is not one of `Present|Absent|Late`.
    InvalidStatus(String),
    /// Text is not a catalogue course.
    InvalidCourse(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Roster(err) => write!(f, "{err}"),
            Self::StudentNotFound(id) => write!(f, "student not found: {id}"),
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::InvalidStatus(value) => {
                write!(f, "invalid status `{value}`; expected present|absent|late")
            }
            Self::InvalidCourse(value) => write!(f, "unknown course `{value}`"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Roster(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StudentValidationError> for ServiceError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RosterError> for ServiceError {
    fn from(value: RosterError) -> Self {
        Self::Roster(value)
    }
}

/// One row of the per-day marking grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySheetRow {
    pub student: Student,
    pub status: Option<AttendanceStatus>,
}

/// Acknowledgement returned when a day's grid is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySaveReport {
    pub date: NaiveDate,
    /// Roster students with a mark for `date`.
    pub marked: usize,
    /// Roster students without a mark for `date`.
    pub unmarked: usize,
}

/// Session facade over roster and attendance repositories.
pub struct AttendanceService<S: StudentRepository, A: AttendanceRepository> {
    students: S,
    attendance: A,
}

/// Session backed by in-memory repositories.
pub type AttendanceStore =
    AttendanceService<InMemoryStudentRepository, InMemoryAttendanceRepository>;

impl AttendanceStore {
    /// Creates an empty in-memory session.
    pub fn in_memory() -> Self {
        Self::new(
            InMemoryStudentRepository::new(),
            InMemoryAttendanceRepository::new(),
        )
    }

    /// Creates an in-memory session loaded with fixture data.
    ///
    /// Seeded attendance ends at `anchor`.
    pub fn seeded(anchor: NaiveDate) -> Self {
        let mut store = Self::in_memory();
        for student in seed_students() {
            if let Err(err) = store.students.add_student(student) {
                warn!("event=seed_skipped module=service status=error reason={err}");
            }
        }
        for record in seed_attendance(anchor) {
            store.attendance.import_record(record);
        }
        info!(
            "event=session_seeded module=service status=ok students={} records={} anchor={}",
            store.students.len(),
            store.attendance.len(),
            anchor
        );
        store
    }
}

impl<S: StudentRepository, A: AttendanceRepository> AttendanceService<S, A> {
    /// Creates a service using the provided repository implementations.
    pub fn new(students: S, attendance: A) -> Self {
        Self {
            students,
            attendance,
        }
    }

    /// Lists the roster in registration order.
    pub fn list_students(&self) -> Vec<Student> {
        self.students.list_students()
    }

    pub fn find_student(&self, id: &StudentId) -> Option<Student> {
        self.students.get_student(id)
    }

    /// Case-insensitive roster search on name or course label.
    ///
    /// A blank term returns the whole roster.
    pub fn search_students(&self, term: &str) -> Vec<Student> {
        let needle = term.trim().to_lowercase();
        let students = self.students.list_students();
        if needle.is_empty() {
            return students;
        }
        students
            .into_iter()
            .filter(|student| {
                student.name.to_lowercase().contains(&needle)
                    || student.course.label().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Registers a student with a generated id and today's local date.
    pub fn register_student(&mut self, fields: NewStudent) -> Result<Student, ServiceError> {
        self.register_student_on(fields, Local::now().date_naive())
    }

    /// Registers a student with a generated id and the given date.
    ///
    /// # Errors
    /// - `Validation` when name or contact fail registration rules.
    pub fn register_student_on(
        &mut self,
        fields: NewStudent,
        registration_date: NaiveDate,
    ) -> Result<Student, ServiceError> {
        let student = match fields.into_student(StudentId::generate(), registration_date) {
            Ok(student) => student,
            Err(err) => {
                warn!(
                    "event=student_registration_rejected module=service status=error reason={}",
                    err.code()
                );
                return Err(err.into());
            }
        };

        self.students.add_student(student.clone())?;
        info!(
            "event=student_registered module=service status=ok student_id={} course={} date={}",
            student.id,
            student.course.key(),
            student.registration_date
        );
        Ok(student)
    }

    /// Sets the status for `(student_id, date)`, inserting or overwriting.
    ///
    /// Unknown student ids are accepted. Returns that student's records in
    /// insertion order.
    pub fn set_attendance(
        &mut self,
        student_id: &StudentId,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Vec<AttendanceRecord> {
        match self.attendance.upsert_status(student_id, date, status) {
            UpsertOutcome::Inserted(record_id) => info!(
                "event=attendance_inserted module=service status=ok record_id={} \
                 student_id={} date={} value={}",
                record_id,
                student_id,
                date,
                status.label()
            ),
            UpsertOutcome::Updated { id, previous } => info!(
                "event=attendance_updated module=service status=ok record_id={} \
                 student_id={} date={} previous={} value={}",
                id,
                student_id,
                date,
                previous.label(),
                status.label()
            ),
        }
        self.attendance.records_for_student(student_id)
    }

    /// Like `set_attendance`, but rejects ids missing from the roster.
    ///
    /// # Errors
    /// - `StudentNotFound` when `student_id` is not registered.
    pub fn set_attendance_checked(
        &mut self,
        student_id: &StudentId,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<Vec<AttendanceRecord>, ServiceError> {
        if self.students.get_student(student_id).is_none() {
            return Err(ServiceError::StudentNotFound(student_id.clone()));
        }
        Ok(self.set_attendance(student_id, date, status))
    }

    /// Returns the latest status for `(student_id, date)`, if marked.
    pub fn get_attendance(
        &self,
        student_id: &StudentId,
        date: NaiveDate,
    ) -> Option<AttendanceStatus> {
        self.attendance.get_status(student_id, date)
    }

    /// Returns one student's records in insertion order.
    pub fn student_records(&self, student_id: &StudentId) -> Vec<AttendanceRecord> {
        self.attendance.records_for_student(student_id)
    }

    /// Lists enriched records passing `predicates`, in insertion order.
    pub fn list_attendance(&self, predicates: &AttendanceFilter) -> Vec<EnrichedRecord> {
        let enriched = enrich(
            &self.attendance.list_records(),
            &self.students.list_students(),
        );
        filter(&enriched, predicates)
    }

    /// Three-bucket status counts over the filtered records.
    pub fn summarize_attendance(&self, predicates: &AttendanceFilter) -> AttendanceSummary {
        summarize(&self.list_attendance(predicates))
    }

    /// Builds the marking grid for one day, in roster order.
    pub fn day_sheet(&self, date: NaiveDate) -> Vec<DaySheetRow> {
        self.students
            .list_students()
            .into_iter()
            .map(|student| {
                let status = self.attendance.get_status(&student.id, date);
                DaySheetRow { student, status }
            })
            .collect()
    }

    /// Acknowledges the grid for one day.
    ///
    /// Nothing is persisted; marks already live in the session store.
    pub fn save_day(&self, date: NaiveDate) -> DaySaveReport {
        let sheet = self.day_sheet(date);
        let marked = sheet.iter().filter(|row| row.status.is_some()).count();
        let report = DaySaveReport {
            date,
            marked,
            unmarked: sheet.len() - marked,
        };
        info!(
            "event=attendance_saved module=service status=ok date={} marked={} unmarked={}",
            report.date, report.marked, report.unmarked
        );
        report
    }

    /// Dashboard numbers for `date`.
    pub fn dashboard(&self, date: NaiveDate) -> DashboardStats {
        compute_dashboard(
            &self.students.list_students(),
            &self.attendance.list_records(),
            date,
        )
    }
}
