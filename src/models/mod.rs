//! Data models module
//!
//! This module contains all data structures used throughout the crate

pub mod user;

// Re-export commonly used models
pub use user::{Category, Language, UserField, UserRecord};
