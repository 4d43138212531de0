//! Repository layer for database operations

pub mod notification;
pub mod user;

pub use notification::NotificationRepository;
pub use user::UserRepository;
