use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is internally reference-counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sitrep_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
