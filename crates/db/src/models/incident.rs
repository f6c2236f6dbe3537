//! Incident entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sitrep_core::incident::{DEFAULT_SEVERITY, DEFAULT_STATUS};
use sitrep_core::types::{DbId, Timestamp};

/// A row from the `incidents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Incident {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new incident.
///
/// `severity` and `status` default at deserialization time so the defaulting
/// rule sits next to validation rather than hiding in the table schema.
#[derive(Debug, Deserialize)]
pub struct CreateIncident {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(default = "default_severity")]
    pub severity: Option<String>,
    #[serde(default = "default_status")]
    pub status: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

fn default_severity() -> Option<String> {
    Some(DEFAULT_SEVERITY.to_string())
}

fn default_status() -> Option<String> {
    Some(DEFAULT_STATUS.to_string())
}

/// DTO for partially updating an incident. `None` leaves a field unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateIncident {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Query parameters for listing incidents.
///
/// All filters are optional and combine with logical AND; an absent or
/// empty-string parameter imposes no constraint.
#[derive(Debug, Default, Deserialize)]
pub struct IncidentListParams {
    /// Exact match on `category`.
    pub category: Option<String>,
    /// Exact match on `severity`.
    pub severity: Option<String>,
    /// Exact match on `status`.
    pub status: Option<String>,
    /// Case-insensitive substring matched against title or description.
    pub q: Option<String>,
    /// Inclusive lower bound: midnight of this day.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound: the whole calendar day.
    pub end_date: Option<NaiveDate>,
}
