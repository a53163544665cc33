//! Student domain model.
//!
//! # Responsibility
//! - Define the roster entry referenced by attendance records.
//! - Validate registration input before a student enters the roster.
//!
//! # Invariants
//! - `id` is assigned once at registration and never changes.
//! - `name` is trimmed and at least `MIN_NAME_CHARS` characters long.
//! - `contact` is an email address or a 10-11 digit phone number.
//! - `course` is always one of the fixed `Course` catalogue entries.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Minimum number of characters for a registered display name.
pub const MIN_NAME_CHARS: usize = 2;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10,11}$").expect("valid phone regex"));

/// Opaque student identifier.
///
/// Registration generates UUID strings; fixtures and imports may use any
/// non-empty text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Generates a fresh unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for StudentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StudentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Fixed class catalogue offered by the dojo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    Karate,
    Capoeira,
    JiuJitsu,
}

impl Course {
    /// Catalogue in display order.
    pub const ALL: [Course; 3] = [Course::Karate, Course::Capoeira, Course::JiuJitsu];

    /// Stable machine key, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            Self::Karate => "karate",
            Self::Capoeira => "capoeira",
            Self::JiuJitsu => "jiu_jitsu",
        }
    }

    /// Human-readable label including the weekly schedule.
    pub fn label(self) -> &'static str {
        match self {
            Self::Karate => "Karate - Mon, Wed, Fri (18:00-19:30)",
            Self::Capoeira => "Capoeira - Mon, Wed, Fri (20:00-21:30)",
            Self::JiuJitsu => "Jiu Jitsu - Tue, Thu (19:00-21:00)",
        }
    }

    /// Parses a machine key or a full label, case-insensitively.
    ///
    /// Returns `None` for anything outside the catalogue.
    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::ALL.into_iter().find(|course| {
            course.key().eq_ignore_ascii_case(needle) || course.label().eq_ignore_ascii_case(needle)
        })
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Email address or phone digits.
    pub contact: String,
    pub course: Course,
    /// Enrollment day, serialized as `YYYY-MM-DD`.
    pub registration_date: NaiveDate,
}

/// Registration form input, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub contact: String,
    pub course: Course,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, contact: impl Into<String>, course: Course) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            course,
        }
    }

    /// Checks registration field rules.
    ///
    /// # Errors
    /// - `NameTooShort` when the trimmed name has fewer than `MIN_NAME_CHARS` chars.
    /// - `InvalidContact` when contact is neither an email nor 10-11 digits.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(StudentValidationError::NameTooShort {
                min: MIN_NAME_CHARS,
            });
        }
        if !is_valid_contact(self.contact.trim()) {
            return Err(StudentValidationError::InvalidContact(self.contact.clone()));
        }
        Ok(())
    }

    /// Validates input and builds the roster entry.
    pub fn into_student(
        self,
        id: StudentId,
        registration_date: NaiveDate,
    ) -> Result<Student, StudentValidationError> {
        if id.as_str().trim().is_empty() {
            return Err(StudentValidationError::EmptyId);
        }
        self.validate()?;
        Ok(Student {
            id,
            name: self.name.trim().to_string(),
            contact: self.contact.trim().to_string(),
            course: self.course,
            registration_date,
        })
    }
}

/// Registration validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    NameTooShort { min: usize },
    InvalidContact(String),
    EmptyId,
}

impl StudentValidationError {
    /// Stable machine-readable reason, safe to log.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameTooShort { .. } => "name_too_short",
            Self::InvalidContact(_) => "invalid_contact",
            Self::EmptyId => "empty_id",
        }
    }
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort { min } => write!(f, "name must have at least {min} characters"),
            Self::InvalidContact(value) => write!(
                f,
                "contact `{value}` must be an email or a phone number with 10 or 11 digits"
            ),
            Self::EmptyId => write!(f, "student id must not be empty"),
        }
    }
}

impl Error for StudentValidationError {}

fn is_valid_contact(value: &str) -> bool {
    EMAIL_RE.is_match(value) || PHONE_RE.is_match(value)
}
