//! Core domain logic for Rollcall, a student attendance tracker.
//! This crate is the single source of truth for roster and attendance invariants.

pub mod config;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod report;
pub mod repo;
pub mod service;

pub use config::{default_log_level, LogConfig};
pub use logging::{init_logging, init_logging_with, logging_status};
pub use model::attendance::{
    format_session_date, parse_session_date, AttendanceRecord, AttendanceStatus, RecordId,
};
pub use model::student::{Course, NewStudent, Student, StudentId, StudentValidationError};
pub use report::attendance_report::{
    enrich, filter, summarize, AttendanceFilter, AttendanceSummary, EnrichedRecord, StatusCount,
    NOT_APPLICABLE_COURSE, UNKNOWN_STUDENT_NAME,
};
pub use repo::attendance_repo::{
    AttendanceIndex, AttendanceRepository, InMemoryAttendanceRepository, UpsertOutcome,
};
pub use repo::student_repo::{InMemoryStudentRepository, RosterError, StudentRepository};
pub use service::attendance_service::{
    AttendanceService, AttendanceStore, DaySaveReport, DaySheetRow, ServiceError,
};
pub use service::dashboard::DashboardStats;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
