//! Shared test helpers

pub mod database_helper;

pub use database_helper::TestDatabase;
