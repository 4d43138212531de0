//! Database connection management

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::utils::errors::StorageError;

pub type DatabasePool = Pool<Sqlite>;

/// Create a new database connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool, StorageError> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await?;

    // Test the connection
    sqlx::query("SELECT 1").execute(&pool).await?;

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}

/// Run database migrations.
///
/// Migrations are versioned and ordered; each step is applied exactly once,
/// so re-running against an already-current schema is a no-op. The olympiads
/// column ships as its own step and lands cleanly on databases created before
/// the category existed.
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), StorageError> {
    tracing::info!("Running database migrations...");

    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &DatabasePool) -> Result<(), StorageError> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}
