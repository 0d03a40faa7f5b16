//! # SchoolHub DB
//!
//! PostgreSQL connection pool for the SchoolHub API.
//!
//! One pool is created at startup, stored in the application state, and
//! cloned into every request handler.
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_db::init_db_pool;
//!
//! let pool = init_db_pool().await?;
//! schoolhub_db::run_migrations(&pool).await?;
//! ```

use std::env;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tracing::info;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while preparing the database.
#[derive(Debug, Error)]
pub enum DbInitError {
    #[error("DATABASE_URL must be set")]
    MissingUrl,
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Connects to the database named by `DATABASE_URL`.
///
/// `DATABASE_MAX_CONNECTIONS` caps the pool size (default 10).
pub async fn init_db_pool() -> Result<PgPool, DbInitError> {
    let database_url = env::var("DATABASE_URL").map_err(|_| DbInitError::MissingUrl)?;
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .map_err(DbInitError::Connect)?;

    info!(max_connections, "Database pool ready");
    Ok(pool)
}

/// Applies the SQL migrations bundled with the workspace.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbInitError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(DbInitError::Migrate)
}
