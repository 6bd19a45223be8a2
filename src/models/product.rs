// Catalog models - Product
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_util::lenient_datetime;
use super::{is_blank, Record};
use crate::api::ApiError;
use crate::catalog::{FilterField, Filterable};

/// Categories offered by the admin product form
pub const PRODUCT_CATEGORIES: [&str; 7] = [
    "CCTV Cameras",
    "IoT Solutions",
    "Home & Office Security",
    "Biometric Devices",
    "Intercom Systems",
    "Automation Systems",
    "Fire Alarm Systems",
];

/// A catalog product as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(id: impl Into<String>, product_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            product_name: Some(product_name.into()),
            category: None,
            brand: None,
            description: None,
            image: None,
            created_at: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for Product {
    fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Name => self.product_name.as_deref(),
            FilterField::Category => self.category.as_deref(),
            FilterField::Brand => self.brand.as_deref(),
            FilterField::Description => self.description.as_deref(),
            _ => None,
        }
    }

    fn search_fields() -> &'static [FilterField] {
        &[
            FilterField::Name,
            FilterField::Description,
            FilterField::Brand,
            FilterField::Category,
        ]
    }
}

/// Body of the admin create/update product requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub product_name: String,
    pub category: String,
    pub brand: String,
    pub description: String,
    pub image: String,
}

impl ProductForm {
    /// Prefill the form from an existing product (edit flow)
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone().unwrap_or_default(),
            category: product.category.clone().unwrap_or_default(),
            brand: product.brand.clone().unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
            image: product.image.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.product_name) || is_blank(&self.category) {
            return Err(ApiError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }

        let category = self.category.trim();
        if !PRODUCT_CATEGORIES.iter().any(|c| *c == category) {
            return Err(ApiError::Validation(format!(
                "Unknown product category: {}",
                category
            )));
        }

        Ok(())
    }
}
