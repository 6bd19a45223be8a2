// Catalog models - Enquiry (contact requests)
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::serde_util::{lenient_datetime, lenient_string};
use super::{is_blank, Record};
use crate::api::ApiError;
use crate::catalog::{FilterField, Filterable};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// A customer enquiry submitted through the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Enquiry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            email: None,
            phone_number: None,
            subject: None,
            message: None,
            created_at: None,
        }
    }
}

impl Record for Enquiry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for Enquiry {
    fn field(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Name => self.name.as_deref(),
            FilterField::Email => self.email.as_deref(),
            FilterField::Phone => self.phone_number.as_deref(),
            FilterField::Subject => self.subject.as_deref(),
            FilterField::Message => self.message.as_deref(),
            _ => None,
        }
    }

    fn search_fields() -> &'static [FilterField] {
        &[FilterField::Name, FilterField::Email, FilterField::Phone]
    }
}

/// Body of the public contact form submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub subject: String,
    pub message: String,
}

impl EnquiryForm {
    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.name) || is_blank(&self.email) || is_blank(&self.message) {
            return Err(ApiError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }

        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(ApiError::Validation(
                "Please enter a valid email address".to_string(),
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
    fn test_numeric_phone_is_kept_as_text() {
        let enquiry: Enquiry = serde_json::from_value(json!({
            "_id": "e1",
            "name": "Asha",
            "phoneNumber": 5551234
        }))
        .unwrap();

        assert_eq!(enquiry.phone_number.as_deref(), Some("5551234"));
        assert!(enquiry.email.is_none());
    }

    #[test]
    fn test_contact_form_validation() {
        let mut form = EnquiryForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            message: "Need a quote for 4 cameras".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());

        form.email = "asha at example".to_string();
        assert_eq!(
            form.validate().unwrap_err().message(),
            "Please enter a valid email address"
        );

        form.message = String::new();
        assert_eq!(
            form.validate().unwrap_err().message(),
            "Please fill in all required fields"
        );
    }
}
