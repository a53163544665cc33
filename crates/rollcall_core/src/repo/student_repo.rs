//! Student roster repository contracts and in-memory implementation.
//!
//! # Invariants
//! - Roster order is registration order.
//! - Students are only ever appended; ids are unique within the roster.

use crate::model::student::{Student, StudentId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Roster write failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    DuplicateStudentId(StudentId),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateStudentId(id) => write!(f, "student id already registered: {id}"),
        }
    }
}

impl Error for RosterError {}

/// Repository interface for the student roster.
pub trait StudentRepository {
    /// Appends one student. Rejects an id that is already registered.
    fn add_student(&mut self, student: Student) -> Result<(), RosterError>;
    fn get_student(&self, id: &StudentId) -> Option<Student>;
    /// Returns all students in registration order.
    fn list_students(&self) -> Vec<Student>;
}

/// Session-owned student roster.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    students: Vec<Student>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn add_student(&mut self, student: Student) -> Result<(), RosterError> {
        if self.students.iter().any(|existing| existing.id == student.id) {
            return Err(RosterError::DuplicateStudentId(student.id));
        }
        self.students.push(student);
        Ok(())
    }

    fn get_student(&self, id: &StudentId) -> Option<Student> {
        self.students.iter().find(|student| &student.id == id).cloned()
    }

    fn list_students(&self) -> Vec<Student> {
        self.students.clone()
    }
}
