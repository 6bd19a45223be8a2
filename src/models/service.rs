// Catalog models - Service (installation, AMC, ...)
use serde::{Deserialize, Serialize};

use super::serde_util::lenient_string;
use super::{is_blank, Record};
use crate::api::ApiError;
use crate::catalog::{FilterField, Filterable};

/// A company service offered alongside the product catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// The backend stores price either as a number or free text ("On request")
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: Option<String>,
}

impl Record for Service {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for Service {
    fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Name => self.service_name.as_deref(),
            FilterField::Description => self.description.as_deref(),
            _ => None,
        }
    }

    fn search_fields() -> &'static [FilterField] {
        &[FilterField::Name, FilterField::Description]
    }
}

/// Body of the admin add/update service requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceForm {
    pub service_name: String,
    pub description: String,
    pub price: String,
}

impl ServiceForm {
    pub fn from_service(service: &Service) -> Self {
        Self {
            service_name: service.service_name.clone().unwrap_or_default(),
            description: service.description.clone().unwrap_or_default(),
            price: service.price.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.service_name) || is_blank(&self.description) {
            return Err(ApiError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_accepts_number_or_text() {
        let numeric: Service =
            serde_json::from_value(json!({"_id": "s1", "serviceName": "AMC", "price": 4999}))
                .unwrap();
        let text: Service =
            serde_json::from_value(json!({"_id": "s2", "price": "On request"})).unwrap();

        assert_eq!(numeric.price.as_deref(), Some("4999"));
        assert_eq!(text.price.as_deref(), Some("On request"));
        assert!(text.service_name.is_none());
    }

    #[test]
    fn test_service_form_requires_name_and_description() {
        let form = ServiceForm {
            service_name: "Installation".to_string(),
            ..Default::default()
        };
        assert!(matches!(form.validate(), Err(ApiError::Validation(_))));

        let form = ServiceForm {
            service_name: "Installation".to_string(),
            description: "On-site camera installation".to_string(),
            price: String::new(),
        };
        assert!(form.validate().is_ok());
    }
}
