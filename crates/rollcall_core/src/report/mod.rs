//! Report projections over attendance records.
//!
//! # Responsibility
//! - Derive enriched, filtered and summarized views from store snapshots.
//! - Hold no state of their own.

pub mod attendance_report;
