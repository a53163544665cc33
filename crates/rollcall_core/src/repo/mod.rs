//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep storage layout (record vector + per-student index) away from
//!   service orchestration.
//!
//! # Invariants
//! - State is owned by one session; nothing here is shared across threads.
//! - Reads return owned snapshots, never handles into internal storage.

pub mod attendance_repo;
pub mod student_repo;
