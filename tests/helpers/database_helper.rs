//! Test database helper utilities
//!
//! Sets up an in-memory SQLite database with migrations applied, one per
//! test, so tests stay isolated without any external services.

use andijanhub_storage::database::StorageService;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub struct TestDatabase {
    pub pool: SqlitePool,
}

impl TestDatabase {
    /// Create a migrated in-memory test database
    pub async fn new() -> Result<Self, sqlx::Error> {
        Self::new_with_migrations(true).await
    }

    /// Create a test database, optionally skipping migrations
    pub async fn new_with_migrations(run_migrations: bool) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        // A single pooled connection keeps the in-memory database alive and
        // shared across every query in the test.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        if run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Storage service over this test database
    pub fn service(&self) -> StorageService {
        StorageService::new(self.pool.clone())
    }
}
