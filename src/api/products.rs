// Product endpoints
use reqwest::Method;

use super::envelope::acknowledgement;
use super::{ApiClient, ApiError};
use crate::models::{ApiMessage, Product, ProductForm};

impl ApiClient {
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_collection("/auth/products").await
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        self.get_item(&format!("/auth/products/{}", id)).await
    }

    pub async fn create_product(&self, form: &ProductForm) -> Result<ApiMessage, ApiError> {
        form.validate()?;
        let payload = self.send(Method::POST, "/auth/products/add", form).await?;
        acknowledgement(payload)
    }

    pub async fn update_product(&self, id: &str, form: &ProductForm) -> Result<ApiMessage, ApiError> {
        form.validate()?;
        let payload = self
            .send(Method::PUT, &format!("/auth/products/{}", id), form)
            .await?;
        acknowledgement(payload)
    }

    pub async fn delete_product(&self, id: &str) -> Result<ApiMessage, ApiError> {
        let payload = self
            .request(Method::DELETE, &format!("/auth/products/{}", id), None)
            .await?;
        acknowledgement(payload)
    }
}
