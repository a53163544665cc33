//! Domain model for the roster and attendance marks.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep attendance records normalized: they reference students by id only.
//!
//! # Invariants
//! - Every student is identified by a stable `StudentId`.
//! - Students and records are never deleted.

pub mod attendance;
pub mod student;
