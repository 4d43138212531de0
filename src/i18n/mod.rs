//! Internationalization module
//!
//! Localized texts for the notification dispatch job in the three languages
//! the bot supports.

pub mod messages;

pub use messages::{button_text, notification_text};
