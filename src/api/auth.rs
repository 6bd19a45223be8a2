// Auth endpoints: sign-up, sign-in, logout, profile
use reqwest::Method;

use super::envelope::{item, unwrap_key};
use super::{ApiClient, ApiError};
use crate::models::{AuthResponse, Credentials, ProfileForm, SignupForm, UserProfile};

impl ApiClient {
    /// Register a new account. Does not sign the user in.
    pub async fn signup(&self, form: &SignupForm) -> Result<AuthResponse, ApiError> {
        form.validate()?;
        let payload = self.send(Method::POST, "/auth/signup", form).await?;
        item(payload)
    }

    /// Sign in and persist the returned token (and user, when present)
    pub async fn signin(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        credentials.validate()?;
        let payload = self.send(Method::POST, "/auth/signin", credentials).await?;
        let response: AuthResponse = item(payload)?;

        if let Some(token) = response.token.as_deref() {
            self.auth()
                .sign_in(token, response.user.as_ref())
                .map_err(|e| ApiError::Storage(format!("Failed to store credentials: {:#}", e)))?;
            log::info!("Signed in as {}", credentials.email);
        } else {
            log::warn!("Sign-in response carried no token");
        }

        Ok(response)
    }

    /// Sign out. Local credentials are dropped whatever the backend says.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.request(Method::POST, "/auth/logout", None).await;

        if let Err(e) = self.auth().sign_out() {
            log::error!("Failed to clear stored credentials: {}", e);
        }

        result.map(|_| ())
    }

    /// Profile of the user the current token belongs to
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        let payload = self.request(Method::GET, "/auth/user", None).await?;
        item(unwrap_key(payload, "user"))
    }

    pub async fn edit_user_profile(&self, id: &str) -> Result<UserProfile, ApiError> {
        let payload = self
            .request(Method::GET, &format!("/auth/users/edit/{}", id), None)
            .await?;
        item(unwrap_key(payload, "user"))
    }

    pub async fn update_user_profile(
        &self,
        id: &str,
        form: &ProfileForm,
    ) -> Result<UserProfile, ApiError> {
        let payload = self
            .send(Method::PUT, &format!("/auth/users/edit/{}", id), form)
            .await?;
        item(unwrap_key(payload, "user"))
    }
}
