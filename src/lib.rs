//! AndijanHub storage core
//!
//! Persistence layer for the AndijanHub opportunity-notification bot: per-user
//! language choice, channel-verification state, category opt-in flags, and the
//! dedup ledger of posts already pushed to each user. The conversational bot
//! layer and the dispatch job consume this crate; neither lives here.

pub mod config;
pub mod database;
pub mod i18n;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, StorageError};

// Re-export main components for easy access
pub use database::{create_pool, run_migrations, DatabasePool, StorageService};
pub use models::{Category, Language, UserField, UserRecord};
