//! Database service layer
//!
//! This module provides a high-level interface to database operations,
//! combining the user store and the notification ledger over one pool.

use chrono::Utc;
use tracing::debug;

use crate::database::{DatabasePool, NotificationRepository, UserRepository};
use crate::models::{Category, Language, UserField, UserRecord};
use crate::utils::errors::StorageError;
use crate::utils::logging::log_notification;

#[derive(Debug, Clone)]
pub struct StorageService {
    pub users: UserRepository,
    pub notifications: NotificationRepository,
}

impl StorageService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            notifications: NotificationRepository::new(pool),
        }
    }

    /// Store the user's UI language, creating the record if needed
    pub async fn set_language(&self, user_id: i64, language: Language) -> Result<(), StorageError> {
        debug!(user_id, language = %language, "Setting user language");
        self.users
            .upsert(user_id, &[UserField::Language(Some(language))])
            .await
    }

    /// Flip one category opt-in flag
    pub async fn set_category(
        &self,
        user_id: i64,
        category: Category,
        enabled: bool,
    ) -> Result<(), StorageError> {
        debug!(user_id, category = category.code(), enabled, "Setting category opt-in");
        self.users
            .upsert(user_id, &[UserField::category(category, enabled)])
            .await
    }

    /// Record a successful channel-membership check.
    ///
    /// Stamps the verification time and cooldown together with the flag so
    /// a half-written verification state is never observable.
    pub async fn record_verification(
        &self,
        user_id: i64,
        cooldown_seconds: i64,
    ) -> Result<(), StorageError> {
        self.users
            .upsert(
                user_id,
                &[
                    UserField::IsVerified(true),
                    UserField::LastVerified(Some(Utc::now())),
                    UserField::VerificationCooldown(Some(cooldown_seconds)),
                ],
            )
            .await
    }

    /// Drop the verified flag after a failed membership re-check
    pub async fn clear_verification(&self, user_id: i64) -> Result<(), StorageError> {
        self.users
            .upsert(user_id, &[UserField::IsVerified(false)])
            .await
    }

    /// Pre-send check for the dispatch job: the user must exist, be opted
    /// into the category, and not have seen the post yet.
    pub async fn should_notify(
        &self,
        user_id: i64,
        category: Category,
        post_id: &str,
    ) -> Result<bool, StorageError> {
        let send = match self.users.get(user_id).await? {
            Some(record) if record.opted_in(category) => {
                !self.notifications.is_notified(user_id, post_id).await?
            }
            _ => false,
        };
        log_notification(user_id, post_id, send);

        Ok(send)
    }

    /// Verified recipients for a category post
    pub async fn recipients(&self, category: Category) -> Result<Vec<UserRecord>, StorageError> {
        self.users.list_opted_in(category).await
    }
}
