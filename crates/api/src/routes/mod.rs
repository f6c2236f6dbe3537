//! Route definitions.

pub mod health;
pub mod incidents;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /incidents          list, create
/// /incidents/{id}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/incidents", incidents::router())
}
