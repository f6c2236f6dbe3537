//! Persistence layer: connection pool, migrations, models, and repositories.

pub mod models;
pub mod repositories;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Store used when `DATABASE_URL` is unset: a local SQLite file.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://gis_ops.db";

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL, creating the SQLite file
/// if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
