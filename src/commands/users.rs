//! Admin commands for user accounts

use crate::models::{ApiMessage, UserProfile};
use crate::state::AppState;

pub async fn user_list(state: &AppState) -> Result<Vec<UserProfile>, String> {
    state.api().list_users().await.map_err(|e| e.to_string())
}

pub async fn user_delete(state: &AppState, id: String) -> Result<ApiMessage, String> {
    if state
        .api()
        .auth()
        .current_user()
        .map_or(false, |user| user.id == id)
    {
        return Err("Refusing to delete the signed-in account".to_string());
    }

    state.api().delete_user(&id).await.map_err(|e| e.to_string())
}
