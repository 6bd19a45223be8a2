//! Credential storage and session handling
//!
//! The API client never reads ambient state: it is handed an [`AuthContext`]
//! carrying the credential store and the callback to run when the backend
//! reports the session as expired.

use anyhow::Result;
use std::sync::{Arc, Mutex};

use crate::models::UserProfile;

/// Persisted key of the bearer token
pub const TOKEN_KEY: &str = "token";
/// Persisted key of the signed-in user's profile (JSON)
pub const USER_KEY: &str = "user";
/// Where the client is sent after its credential is rejected
pub const SIGN_IN_ROUTE: &str = "/signin";

/// Opaque key-value persistence for the credential and user profile
pub trait CredentialStore: Send + Sync {
    fn token(&self) -> Result<Option<String>>;
    fn set_token(&self, token: &str) -> Result<()>;
    fn user(&self) -> Result<Option<UserProfile>>;
    fn set_user(&self, user: &UserProfile) -> Result<()>;
    /// Remove token and user. Clearing an empty store is a no-op.
    fn clear(&self) -> Result<()>;
}

/// Process-local store, used by tests and one-shot tools
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
    user: Mutex<Option<UserProfile>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
            user: Mutex::new(None),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn token(&self) -> Result<Option<String>> {
        let guard = self
            .token
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        Ok(guard.clone())
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn user(&self) -> Result<Option<UserProfile>> {
        let guard = self
            .user
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        Ok(guard.clone())
    }

    fn set_user(&self, user: &UserProfile) -> Result<()> {
        let mut guard = self
            .user
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        *guard = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.token
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?
            .take();
        self.user
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?
            .take();
        Ok(())
    }
}

/// Callback run after a 401; receives the route to send the user to
pub type SessionExpiredHook = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Clone)]
pub struct AuthContext {
    store: Arc<dyn CredentialStore>,
    on_session_expired: SessionExpiredHook,
}

impl AuthContext {
    pub fn new(store: Arc<dyn CredentialStore>, on_session_expired: SessionExpiredHook) -> Self {
        Self {
            store,
            on_session_expired,
        }
    }

    /// Context whose expiry callback only logs
    pub fn with_store(store: Arc<dyn CredentialStore>) -> Self {
        Self::new(
            store,
            Arc::new(|route: &str| log::info!("Session expired, sign in again at {}", route)),
        )
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Token to attach to the next request. A store failure is logged and
    /// the request goes out unauthenticated.
    pub fn bearer_token(&self) -> Option<String> {
        match self.store.token() {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                log::warn!("Failed to read stored token: {}", e);
                None
            }
        }
    }

    /// Currently stored user profile, if readable
    pub fn current_user(&self) -> Option<UserProfile> {
        match self.store.user() {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Failed to read stored user: {}", e);
                None
            }
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.bearer_token().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().map_or(false, |user| user.is_admin)
    }

    /// Store the credentials returned by a successful sign-in
    pub fn sign_in(&self, token: &str, user: Option<&UserProfile>) -> Result<()> {
        self.store.set_token(token)?;
        if let Some(user) = user {
            self.store.set_user(user)?;
        }
        Ok(())
    }

    /// Drop the stored credentials (sign-out)
    pub fn sign_out(&self) -> Result<()> {
        self.store.clear()
    }

    /// Purge credentials and hand control to the expiry callback
    pub fn expire_session(&self) {
        if let Err(e) = self.store.clear() {
            log::error!("Failed to clear stored credentials: {}", e);
        }
        (self.on_session_expired)(SIGN_IN_ROUTE);
    }
}
