//! Error handling for the AndijanHub storage core
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Field '{0}' given more than once in a single upsert")]
    DuplicateField(&'static str),

    #[error("Unsupported language code: {0}")]
    UnknownLanguage(String),

    #[error("Unsupported category code: {0}")]
    UnknownCategory(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            StorageError::Database(_) => false,
            StorageError::Migration(_) => false,
            StorageError::Config(_) => false,
            StorageError::DuplicateField(_) => false,
            StorageError::UnknownLanguage(_) => false,
            StorageError::UnknownCategory(_) => false,
            StorageError::Io(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StorageError::Database(_) => ErrorSeverity::Critical,
            StorageError::Migration(_) => ErrorSeverity::Critical,
            StorageError::Config(_) => ErrorSeverity::Critical,
            StorageError::DuplicateField(_) => ErrorSeverity::Warning,
            StorageError::UnknownLanguage(_) => ErrorSeverity::Info,
            StorageError::UnknownCategory(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
