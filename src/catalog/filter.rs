// Catalog - List filtering
// Derives the visible subset of an in-memory collection from the active criteria

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::perf_debug;

/// A text field a record can expose to the filter engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Name,
    Category,
    Brand,
    Description,
    Email,
    Phone,
    Subject,
    Message,
}

/// Records that can be filtered by term, category and brand
pub trait Filterable {
    /// Value of `field`, or `None` when the record does not carry it
    fn field(&self, field: FilterField) -> Option<&str>;

    /// Fields the free-text term is matched against
    fn search_fields() -> &'static [FilterField];
}

/// Active user-selected constraints. Blank values mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub term: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// True when no criterion constrains the view
    pub fn is_empty(&self) -> bool {
        active(&self.term).is_none()
            && active(&self.category).is_none()
            && active(&self.brand).is_none()
    }

    /// Currently selected value for `field`, if any
    pub fn selected(&self, field: FilterField) -> Option<&str> {
        let value = match field {
            FilterField::Category => self.category.as_deref(),
            FilterField::Brand => self.brand.as_deref(),
            _ => None,
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    /// Check a single record against every active criterion
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        if let Some(category) = active(&self.category) {
            if normalize(record.field(FilterField::Category)) != category {
                return false;
            }
        }

        if let Some(brand) = active(&self.brand) {
            if normalize(record.field(FilterField::Brand)) != brand {
                return false;
            }
        }

        if let Some(term) = active(&self.term) {
            return T::search_fields()
                .iter()
                .any(|field| normalize(record.field(*field)).contains(&term));
        }

        true
    }
}

/// Normalized form of a criterion, `None` when blank
fn active(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

fn normalize(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_lowercase()
}

/// Stable filter of `records` by `criteria`.
///
/// An absent collection (failed or pending fetch) yields an empty view.
pub fn filter<T>(records: Option<&[T]>, criteria: &FilterCriteria) -> Vec<T>
where
    T: Filterable + Clone,
{
    let Some(records) = records else {
        return Vec::new();
    };

    if criteria.is_empty() {
        return records.to_vec();
    }

    let view: Vec<T> = records
        .iter()
        .filter(|record| criteria.matches(*record))
        .cloned()
        .collect();

    perf_debug!("Filtered {} records down to {}", records.len(), view.len());
    view
}

/// Distinct, non-empty values of `field` present in `records`, sorted
pub fn distinct_values<T: Filterable>(records: &[T], field: FilterField) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.field(field))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
