/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Database connection string (default: a local SQLite file).
    pub database_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                |
    /// |------------------------|------------------------|
    /// | `HOST`                 | `0.0.0.0`              |
    /// | `PORT`                 | `8000`                 |
    /// | `DATABASE_URL`         | `sqlite://gis_ops.db`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| sitrep_db::DEFAULT_DATABASE_URL.into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            request_timeout_secs,
        }
    }
}
