// Credential store backed by the settings table
//
// The bearer token is kept under `token`, the signed-in user's profile as
// JSON under `user`. Both survive restarts, so a CLI invocation can reuse
// the credential from an earlier `signin`.

use anyhow::{Context, Result};

use super::DatabaseManager;
use crate::api::{CredentialStore, TOKEN_KEY, USER_KEY};
use crate::models::UserProfile;

/// `value_type` tag of the stored user profile
const USER_VALUE_TYPE: &str = "json";

impl CredentialStore for DatabaseManager {
    fn token(&self) -> Result<Option<String>> {
        self.get_setting(TOKEN_KEY)
    }

    fn set_token(&self, token: &str) -> Result<()> {
        self.set_setting(TOKEN_KEY, token, "string")
    }

    fn user(&self) -> Result<Option<UserProfile>> {
        let Some(entry) = self.get_setting_entry(USER_KEY)? else {
            return Ok(None);
        };

        if entry.value_type != USER_VALUE_TYPE {
            log::warn!(
                "Ignoring stored user profile of type {:?} (updated {})",
                entry.value_type,
                entry.updated_at
            );
            return Ok(None);
        }

        match serde_json::from_str(&entry.value) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                log::warn!("Ignoring unreadable stored user profile: {}", e);
                Ok(None)
            }
        }
    }

    fn set_user(&self, user: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(user)
            .context("Failed to serialize user profile")?;
        self.set_setting(USER_KEY, &raw, USER_VALUE_TYPE)
    }

    fn clear(&self) -> Result<()> {
        self.delete_settings(&[TOKEN_KEY, USER_KEY])
    }
}
