// Admin endpoints: users and enquiries
use reqwest::Method;

use super::envelope::acknowledgement;
use super::{ApiClient, ApiError};
use crate::models::{ApiMessage, Enquiry, UserProfile};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.get_collection("/auth/users").await
    }

    pub async fn delete_user(&self, id: &str) -> Result<ApiMessage, ApiError> {
        let payload = self
            .request(Method::DELETE, &format!("/auth/users/delete/{}", id), None)
            .await?;
        acknowledgement(payload)
    }

    pub async fn list_enquiries(&self) -> Result<Vec<Enquiry>, ApiError> {
        self.get_collection("/auth/contacts").await
    }
}
