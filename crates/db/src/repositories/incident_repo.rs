//! Repository for the `incidents` table.

use chrono::Utc;

use sitrep_core::incident::{day_end, day_start, non_empty};
use sitrep_core::types::DbId;

use crate::models::incident::{CreateIncident, Incident, IncidentListParams, UpdateIncident};
use crate::DbPool;

/// Column list for `incidents` queries.
const COLUMNS: &str = "\
    id, title, description, category, severity, status, \
    latitude, longitude, created_at, updated_at";

/// Provides CRUD operations for incidents.
pub struct IncidentRepo;

impl IncidentRepo {
    /// Insert a new incident, returning the full row.
    ///
    /// Both timestamps come from a single clock read so that a fresh record
    /// satisfies `created_at == updated_at`.
    pub async fn create(pool: &DbPool, input: &CreateIncident) -> Result<Incident, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO incidents \
                (title, description, category, severity, status, \
                 latitude, longitude, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.severity)
            .bind(&input.status)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find an incident by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM incidents WHERE id = ?");
        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List incidents matching the given filters.
    ///
    /// Supplied filters narrow the result conjunctively; absent filters
    /// impose no constraint. Results are ordered newest-first. Never fails
    /// on an unmatched filter set, it just returns an empty Vec.
    pub async fn list_filtered(
        pool: &DbPool,
        params: &IncidentListParams,
    ) -> Result<Vec<Incident>, sqlx::Error> {
        let conditions = where_conditions(params);

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM incidents {where_clause} ORDER BY created_at DESC"
        );

        let mut q = sqlx::query_as::<_, Incident>(&query);

        if let Some(category) = non_empty(params.category.as_deref()) {
            q = q.bind(category);
        }
        if let Some(severity) = non_empty(params.severity.as_deref()) {
            q = q.bind(severity);
        }
        if let Some(status) = non_empty(params.status.as_deref()) {
            q = q.bind(status);
        }
        if let Some(term) = non_empty(params.q.as_deref()) {
            let pattern = format!("%{term}%");
            q = q.bind(pattern.clone()).bind(pattern);
        }
        if let Some(start) = params.start_date {
            q = q.bind(day_start(start));
        }
        if let Some(end) = params.end_date {
            q = q.bind(day_end(end));
        }

        q.fetch_all(pool).await
    }

    /// Apply a partial update. Only supplied fields change; `updated_at` is
    /// always refreshed. Returns the updated row if found.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateIncident,
    ) -> Result<Option<Incident>, sqlx::Error> {
        let mut assignments: Vec<&str> = Vec::new();

        if input.title.is_some() {
            assignments.push("title = ?");
        }
        if input.description.is_some() {
            assignments.push("description = ?");
        }
        if input.category.is_some() {
            assignments.push("category = ?");
        }
        if input.severity.is_some() {
            assignments.push("severity = ?");
        }
        if input.status.is_some() {
            assignments.push("status = ?");
        }
        if input.latitude.is_some() {
            assignments.push("latitude = ?");
        }
        if input.longitude.is_some() {
            assignments.push("longitude = ?");
        }
        assignments.push("updated_at = ?");

        let query = format!(
            "UPDATE incidents SET {} WHERE id = ? RETURNING {COLUMNS}",
            assignments.join(", ")
        );

        let mut q = sqlx::query_as::<_, Incident>(&query);

        if let Some(ref title) = input.title {
            q = q.bind(title);
        }
        if let Some(ref description) = input.description {
            q = q.bind(description);
        }
        if let Some(ref category) = input.category {
            q = q.bind(category);
        }
        if let Some(ref severity) = input.severity {
            q = q.bind(severity);
        }
        if let Some(ref status) = input.status {
            q = q.bind(status);
        }
        if let Some(latitude) = input.latitude {
            q = q.bind(latitude);
        }
        if let Some(longitude) = input.longitude {
            q = q.bind(longitude);
        }
        q = q.bind(Utc::now()).bind(id);

        q.fetch_optional(pool).await
    }

    /// Delete an incident permanently. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM incidents WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build the WHERE conditions for a filter set, in bind order: category,
/// severity, status, q (two binds), start_date, end_date.
///
/// SQLite `LIKE` is case-insensitive, which gives `q` its case-insensitive
/// substring semantics. The title-OR-description disjunction is the one
/// internal disjunction in an otherwise conjunctive chain.
fn where_conditions(params: &IncidentListParams) -> Vec<&'static str> {
    let mut conditions: Vec<&'static str> = Vec::new();

    if non_empty(params.category.as_deref()).is_some() {
        conditions.push("category = ?");
    }
    if non_empty(params.severity.as_deref()).is_some() {
        conditions.push("severity = ?");
    }
    if non_empty(params.status.as_deref()).is_some() {
        conditions.push("status = ?");
    }
    if non_empty(params.q.as_deref()).is_some() {
        conditions.push("(title LIKE ? OR description LIKE ?)");
    }
    if params.start_date.is_some() {
        conditions.push("created_at >= ?");
    }
    if params.end_date.is_some() {
        conditions.push("created_at <= ?");
    }

    conditions
}
