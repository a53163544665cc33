//! Parsing of untrusted text input into typed service arguments.
//!
//! # Invariants
//! - Every parser returns a `ServiceError` instead of panicking.
//! - `""` and `all` (any case) are the "all" sentinel for filter values.

use crate::model::attendance::{parse_session_date, AttendanceStatus};
use crate::model::student::Course;
use crate::service::attendance_service::ServiceError;
use chrono::NaiveDate;

const ALL_SENTINEL: &str = "all";

pub fn parse_date_input(value: &str) -> Result<NaiveDate, ServiceError> {
    parse_session_date(value).ok_or_else(|| ServiceError::InvalidDate(value.trim().to_string()))
}

pub fn parse_status_input(value: &str) -> Result<AttendanceStatus, ServiceError> {
    AttendanceStatus::parse(value)
        .ok_or_else(|| ServiceError::InvalidStatus(value.trim().to_string()))
}

pub fn parse_course_input(value: &str) -> Result<Course, ServiceError> {
    Course::parse(value).ok_or_else(|| ServiceError::InvalidCourse(value.trim().to_string()))
}

/// Parses a course filter; the "all" sentinel yields `None`.
pub fn parse_course_filter(value: &str) -> Result<Option<Course>, ServiceError> {
    if is_all_sentinel(value) {
        return Ok(None);
    }
    parse_course_input(value).map(Some)
}

/// Parses a status filter; the "all" sentinel yields `None`.
pub fn parse_status_filter(value: &str) -> Result<Option<AttendanceStatus>, ServiceError> {
    if is_all_sentinel(value) {
        return Ok(None);
    }
    parse_status_input(value).map(Some)
}

fn is_all_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::{parse_course_filter, parse_date_input, parse_status_filter};
    use crate::model::attendance::AttendanceStatus;
    use crate::model::student::Course;
    use crate::service::attendance_service::ServiceError;

    #[test]
    fn all_sentinel_disables_filters() {
        assert_eq!(parse_course_filter("ALL"), Ok(None));
        assert_eq!(parse_status_filter(""), Ok(None));
        assert_eq!(parse_course_filter("jiu_jitsu"), Ok(Some(Course::JiuJitsu)));
        assert_eq!(
            parse_status_filter("absent"),
            Ok(Some(AttendanceStatus::Absent))
        );
    }

    #[test]
    fn bad_values_map_to_typed_errors() {
        assert_eq!(
            parse_date_input("2024/05/01"),
            Err(ServiceError::InvalidDate("2024/05/01".to_string()))
        );
        assert_eq!(
            parse_status_filter("excused"),
            Err(ServiceError::InvalidStatus("excused".to_string()))
        );
        assert_eq!(
            parse_course_filter("judo"),
            Err(ServiceError::InvalidCourse("judo".to_string()))
        );
    }
}
