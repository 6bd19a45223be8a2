// Application state shared by the command handlers

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::api::{ApiClient, AuthContext, SessionExpiredHook};
use crate::config::AppConfig;
use crate::database::DatabaseManager;

pub struct AppState {
    /// Local SQLite store; also the credential store behind `api`
    database: Arc<DatabaseManager>,
    api: ApiClient,
}

impl AppState {
    /// Open the local database and build an API client that persists its
    /// session there. `on_session_expired` runs after any 401.
    pub fn init(config: &AppConfig, on_session_expired: SessionExpiredHook) -> Result<Self> {
        let db_path = config.resolve_db_path()?;
        let database = Arc::new(
            DatabaseManager::new(db_path).context("Failed to open local database")?,
        );

        let auth = AuthContext::new(database.clone(), on_session_expired);
        let api = ApiClient::new(config.api.clone(), auth)
            .context("Failed to create API client")?;

        Ok(Self { database, api })
    }

    pub fn db(&self) -> &DatabaseManager {
        &self.database
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}
