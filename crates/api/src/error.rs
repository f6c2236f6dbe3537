use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use sitrep_core::error::CoreError;
use sitrep_core::incident;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds persistence failures.
/// Implements [`IntoResponse`] to produce `{"detail": ...}` bodies, the
/// wire format the map frontend expects.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sitrep_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Core(core) => match core {
                // Incidents are the only entity, so the localized message is
                // fixed here rather than derived from the entity name.
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, incident::MSG_NOT_FOUND.to_string())
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        incident::MSG_INTERNAL.to_string(),
                    )
                }
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    incident::MSG_INTERNAL.to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}
