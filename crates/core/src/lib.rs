//! Domain layer for the sitrep backend: shared types, the error taxonomy,
//! and incident field rules (defaults, validation, date-bound widening).
//!
//! This crate performs no I/O; everything here is pure and unit-testable.

pub mod error;
pub mod incident;
pub mod types;
