//! Notification dedup ledger implementation
//!
//! Tracks which channel posts have already been pushed to each user so the
//! dispatch job never notifies twice. The ledger is a (user_id, post_id)
//! side table; the composite primary key makes duplicates unrepresentable
//! and concurrent marks for the same user merge instead of clobbering.

use sqlx::SqlitePool;

use crate::utils::errors::StorageError;

#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: SqlitePool,
}

impl NotificationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record that `post_id` was pushed to `user_id`.
    ///
    /// Idempotent. Marking for a user without a record is a silent no-op;
    /// the dispatch job only iterates known users, so an unknown id here
    /// means the row was deleted out from under us and there is nothing
    /// sensible to attach the mark to.
    pub async fn mark_notified(&self, user_id: i64, post_id: &str) -> Result<(), StorageError> {
        let user_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = ?)")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        if !user_exists {
            tracing::debug!(user_id, post_id, "mark_notified for unknown user, skipping");
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO notified_posts (user_id, post_id) VALUES (?, ?) \
             ON CONFLICT(user_id, post_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Whether `post_id` was already pushed to `user_id`.
    ///
    /// False for unknown users and for any post id, including the empty
    /// string, when the user's ledger is empty.
    pub async fn is_notified(&self, user_id: i64, post_id: &str) -> Result<bool, StorageError> {
        let notified: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM notified_posts WHERE user_id = ? AND post_id = ?)",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(notified)
    }

    /// All post ids already pushed to a user, oldest mark first
    pub async fn notified_posts(&self, user_id: i64) -> Result<Vec<String>, StorageError> {
        let posts: Vec<String> = sqlx::query_scalar(
            "SELECT post_id FROM notified_posts WHERE user_id = ? ORDER BY notified_at, post_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Ledger size for a user
    pub async fn count_for_user(&self, user_id: i64) -> Result<i64, StorageError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notified_posts WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
