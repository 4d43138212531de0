//! User repository implementation

use sqlx::{QueryBuilder, SqlitePool};

use crate::models::user::{Category, UserField, UserRecord};
use crate::utils::errors::StorageError;

const USER_COLUMNS: &str = "user_id, language, last_verified, verification_cooldown, \
     is_verified, internships, extracurriculars, educational_opportunities, olympiads";

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user record by chat-platform identifier.
    ///
    /// An unknown user is `Ok(None)`, not an error; records are created
    /// lazily by the first upsert.
    pub async fn get(&self, user_id: i64) -> Result<Option<UserRecord>, StorageError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = ?");
        let record = sqlx::query_as::<_, UserRecord>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Insert-or-update exactly the named fields in one atomic statement.
    ///
    /// A missing row is created with table defaults for everything not named;
    /// an existing row keeps all unnamed fields untouched. An empty field list
    /// just ensures the row exists. Column names come from the `UserField`
    /// enum, so no caller-supplied string ever reaches the SQL text.
    pub async fn upsert(&self, user_id: i64, fields: &[UserField]) -> Result<(), StorageError> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.column() == field.column()) {
                return Err(StorageError::DuplicateField(field.column()));
            }
        }

        if fields.is_empty() {
            sqlx::query("INSERT INTO users (user_id) VALUES (?) ON CONFLICT(user_id) DO NOTHING")
                .bind(user_id)
                .execute(&self.pool)
                .await?;
            return Ok(());
        }

        let mut builder: QueryBuilder<'_, sqlx::Sqlite> =
            QueryBuilder::new("INSERT INTO users (user_id");
        for field in fields {
            builder.push(", ");
            builder.push(field.column());
        }
        builder.push(") VALUES (");
        builder.push_bind(user_id);
        for field in fields {
            builder.push(", ");
            field.push_bind(&mut builder);
        }
        builder.push(") ON CONFLICT(user_id) DO UPDATE SET ");
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push(field.column());
            builder.push(" = excluded.");
            builder.push(field.column());
        }

        builder.build().execute(&self.pool).await?;

        Ok(())
    }

    /// Check whether a user row exists
    pub async fn exists(&self, user_id: i64) -> Result<bool, StorageError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = ?)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// List verified users opted into the given category
    pub async fn list_opted_in(&self, category: Category) -> Result<Vec<UserRecord>, StorageError> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {} = TRUE AND is_verified = TRUE ORDER BY user_id",
            category.column()
        );
        let users = sqlx::query_as::<_, UserRecord>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    /// Count total users
    pub async fn count(&self) -> Result<i64, StorageError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
