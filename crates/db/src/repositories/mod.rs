//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod incident_repo;

pub use incident_repo::IncidentRepo;
