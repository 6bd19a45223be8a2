//! Commands for sign-in, sign-up and the signed-in user's profile

use crate::models::{AuthResponse, Credentials, ProfileForm, SignupForm, UserProfile};
use crate::state::AppState;

/// Sign in and store the returned credential
pub async fn auth_signin(
    state: &AppState,
    email: String,
    password: String,
) -> Result<AuthResponse, String> {
    state
        .api()
        .signin(&Credentials { email, password })
        .await
        .map_err(|e| e.to_string())
}

/// Register a new account
pub async fn auth_signup(
    state: &AppState,
    name: String,
    email: String,
    password: String,
) -> Result<AuthResponse, String> {
    state
        .api()
        .signup(&SignupForm {
            name,
            email,
            password,
        })
        .await
        .map_err(|e| e.to_string())
}

/// Sign out. The local credential is removed even if the backend call fails.
pub async fn auth_logout(state: &AppState) -> Result<(), String> {
    if !state.api().auth().is_signed_in() {
        log::info!("No stored session to sign out of");
        return Ok(());
    }

    if let Err(e) = state.api().logout().await {
        log::warn!("Backend logout failed, local session cleared anyway: {}", e);
    }
    Ok(())
}

/// The signed-in user, refreshed from the backend and re-stored
pub async fn auth_whoami(state: &AppState) -> Result<UserProfile, String> {
    let auth = state.api().auth();
    if !auth.is_signed_in() {
        return Err("Not signed in".to_string());
    }

    let user = state.api().current_user().await.map_err(|e| e.to_string())?;
    if let Err(e) = auth.store().set_user(&user) {
        log::warn!("Failed to store refreshed user profile: {}", e);
    }
    Ok(user)
}

/// Show, or with any field given update, the signed-in user's profile
pub async fn auth_profile(
    state: &AppState,
    name: Option<String>,
    email: Option<String>,
) -> Result<UserProfile, String> {
    let auth = state.api().auth();
    let id = auth
        .current_user()
        .map(|user| user.id)
        .ok_or_else(|| "Not signed in".to_string())?;

    if name.is_none() && email.is_none() {
        return state
            .api()
            .edit_user_profile(&id)
            .await
            .map_err(|e| e.to_string());
    }

    let user = state
        .api()
        .update_user_profile(&id, &ProfileForm { name, email })
        .await
        .map_err(|e| e.to_string())?;

    if let Err(e) = auth.store().set_user(&user) {
        log::warn!("Failed to store updated user profile: {}", e);
    }
    Ok(user)
}
