//! Runtime configuration
//!
//! Resolved in order: built-in defaults, then `CATALOG_*` environment
//! variables, then command-line overrides.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::api::ApiConfig;
use crate::database::DatabaseManager;

pub const ENV_API_URL: &str = "CATALOG_API_URL";
pub const ENV_DB_PATH: &str = "CATALOG_DB_PATH";
pub const ENV_TIMEOUT_SECS: &str = "CATALOG_TIMEOUT_SECS";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// `None` means the default location under the user data directory
    pub db_path: Option<PathBuf>,
}

impl AppConfig {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`. Blank values are ignored,
    /// as is a timeout that is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config.api.base_url = url.trim().to_string();
        }

        if let Some(path) = get(ENV_DB_PATH) {
            config.db_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.api.timeout_secs = secs,
                _ => log::warn!("Ignoring invalid {}: {:?}", ENV_TIMEOUT_SECS, raw),
            }
        }

        config
    }

    /// Apply command-line overrides on top of the current values
    pub fn with_overrides(mut self, api_url: Option<String>, db_path: Option<PathBuf>) -> Self {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        if let Some(path) = db_path {
            self.db_path = Some(path);
        }
        self
    }

    /// Database location, falling back to the default path
    pub fn resolve_db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => DatabaseManager::default_path()
                .context("No database path configured"),
        }
    }
}
