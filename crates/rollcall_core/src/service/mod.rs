//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers (CLI, future API layers) decoupled from storage details.
//! - Own parsing of untrusted text at the boundary.

pub mod attendance_service;
pub mod dashboard;
pub mod input;
