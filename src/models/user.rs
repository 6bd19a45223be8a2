// Catalog models - Users and auth payloads
use serde::{Deserialize, Serialize};

use super::serde_util::lenient_bool;
use super::{is_blank, Record};
use crate::api::ApiError;

/// The signed-in user as persisted next to the credential token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "username")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_admin: bool,
}

impl UserProfile {
    /// Name to show in the UI, falling back to the email address
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("unknown user")
    }
}

impl Record for UserProfile {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Sign-in request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.email) || is_blank(&self.password) {
            return Err(ApiError::Validation(
                "Email and password are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Sign-up request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.name) || is_blank(&self.email) || is_blank(&self.password) {
            return Err(ApiError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }
        Ok(())
    }
}

/// Profile edit request body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Response of the sign-in / sign-up endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ success, message }` acknowledgement returned by mutating endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl Default for ApiMessage {
    fn default() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}
