// Database module
// Local SQLite persistence for client state (stored credential and user profile)

pub mod credentials_repo;
pub mod manager;
pub mod migrations;
pub mod models;
pub mod settings_repo;

pub use manager::{DatabaseManager, DATABASE_FILENAME};
pub use models::*;
