//! Handlers for incident CRUD and filtered listing.
//!
//! Listing supports optional equality filters (`category`, `severity`,
//! `status`), a free-text search (`q`), and an inclusive date range
//! (`start_date`, `end_date`), all combined with logical AND in the
//! repository.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use sitrep_core::error::CoreError;
use sitrep_core::incident::validate_title;
use sitrep_core::types::DbId;
use sitrep_db::models::incident::{CreateIncident, IncidentListParams, UpdateIncident};
use sitrep_db::repositories::IncidentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /incidents
// ---------------------------------------------------------------------------

/// List incidents, narrowed by any combination of the optional filters,
/// newest first.
pub async fn list_incidents(
    State(state): State<AppState>,
    Query(params): Query<IncidentListParams>,
) -> AppResult<impl IntoResponse> {
    let incidents = IncidentRepo::list_filtered(&state.pool, &params).await?;
    Ok(Json(incidents))
}

// ---------------------------------------------------------------------------
// GET /incidents/{id}
// ---------------------------------------------------------------------------

/// Get a single incident by ID.
pub async fn get_incident(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let incident = IncidentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incident",
            id,
        }))?;

    Ok(Json(incident))
}

// ---------------------------------------------------------------------------
// POST /incidents
// ---------------------------------------------------------------------------

/// Create a new incident. `severity` and `status` default to `"medium"` and
/// `"open"` when the payload omits them.
pub async fn create_incident(
    State(state): State<AppState>,
    Json(input): Json<CreateIncident>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;

    let incident = IncidentRepo::create(&state.pool, &input).await?;

    tracing::info!(incident_id = incident.id, "Incident created");

    Ok((StatusCode::CREATED, Json(incident)))
}

// ---------------------------------------------------------------------------
// PUT /incidents/{id}
// ---------------------------------------------------------------------------

/// Partially update an incident. Only supplied fields change; `updated_at`
/// is always refreshed.
pub async fn update_incident(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIncident>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_title(title)?;
    }

    let incident = IncidentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incident",
            id,
        }))?;

    tracing::info!(incident_id = id, "Incident updated");

    Ok(Json(incident))
}

// ---------------------------------------------------------------------------
// DELETE /incidents/{id}
// ---------------------------------------------------------------------------

/// Delete an incident permanently.
pub async fn delete_incident(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = IncidentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Incident",
            id,
        }));
    }

    tracing::info!(incident_id = id, "Incident deleted");

    Ok(StatusCode::NO_CONTENT)
}
