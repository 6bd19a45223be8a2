//! List page state
//!
//! A `ListView` owns one page visit's source collection and filter criteria
//! and keeps the derived view in sync with both. Loads are ticketed so that a
//! response arriving after a reload or after the page was discarded is dropped
//! instead of overwriting newer state.

use super::filter::{distinct_values, filter, FilterCriteria, FilterField, Filterable};
use crate::models::Record;

/// Handle for one in-flight load, issued by [`ListView::begin_load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub struct ListView<T> {
    source: Option<Vec<T>>,
    criteria: FilterCriteria,
    view: Vec<T>,
    generation: u64,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            source: None,
            criteria: FilterCriteria::default(),
            view: Vec::new(),
            generation: 0,
        }
    }
}

impl<T> ListView<T>
where
    T: Filterable + Record + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    /// Start a load; any ticket issued earlier becomes stale
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Install the result of a load. `None` marks a failed fetch, which
    /// leaves the page with an empty collection.
    ///
    /// Returns false when the ticket is stale and the result was ignored.
    pub fn apply_load(&mut self, ticket: LoadTicket, records: Option<Vec<T>>) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "Ignoring stale load (ticket {}, current {})",
                ticket.0,
                self.generation
            );
            return false;
        }

        self.source = records;
        self.recompute();
        true
    }

    /// Drop all state, e.g. on navigation away. Pending loads become stale.
    pub fn discard(&mut self) {
        self.generation += 1;
        self.source = None;
        self.view.clear();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn clear_criteria(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Remove a record from the source after a successful delete
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let source = self.source.as_mut()?;
        let index = source.iter().position(|record| record.id() == id)?;
        let removed = source.remove(index);
        self.recompute();
        Some(removed)
    }

    /// Whether a load has completed successfully
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> &[T] {
        self.source.as_deref().unwrap_or_default()
    }

    /// The derived view: source records matching the criteria, in source order
    pub fn view(&self) -> &[T] {
        &self.view
    }

    /// Filter options for `field` drawn from the current collection.
    /// A currently selected value stays offered even when nothing matches it;
    /// it is compared case-insensitively, as the filter itself does.
    pub fn options(&self, field: FilterField) -> Vec<String> {
        let mut options = distinct_values(self.source(), field);

        if let Some(selected) = self.criteria.selected(field) {
            let selected_key = selected.to_lowercase();
            if !options.iter().any(|o| o.to_lowercase() == selected_key) {
                options.push(selected.to_string());
                options.sort();
            }
        }

        options
    }

    fn recompute(&mut self) {
        self.view = filter(self.source.as_deref(), &self.criteria);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("p1", "Bullet Camera")
                .with_category("CCTV Cameras")
                .with_brand("Hikvision"),
            Product::new("p2", "Smart Plug")
                .with_category("IoT Solutions")
                .with_brand("TP-Link"),
            Product::new("p3", "PTZ Camera")
                .with_category("CCTV Cameras")
                .with_brand("Dahua"),
        ]
    }

    fn ids(view: &[Product]) -> Vec<&str> {
        view.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_view_tracks_criteria_changes() {
        let mut list = ListView::new();
        let ticket = list.begin_load();
        assert!(list.apply_load(ticket, Some(catalog())));
        assert_eq!(list.view().len(), 3);

        list.set_criteria(FilterCriteria::new().with_category("CCTV Cameras"));
        assert_eq!(ids(list.view()), vec!["p1", "p3"]);

        list.clear_criteria();
        assert_eq!(list.view().len(), 3);
    }

    #[test]
    fn test_remove_updates_view_without_stale_results() {
        let mut list = ListView::with_criteria(FilterCriteria::new().with_term("camera"));
        let ticket = list.begin_load();
        list.apply_load(ticket, Some(catalog()));
        assert_eq!(ids(list.view()), vec!["p1", "p3"]);

        let removed = list.remove("p1").unwrap();
        assert_eq!(removed.id, "p1");
        assert_eq!(ids(list.view()), vec!["p3"]);
        assert_eq!(list.source().len(), 2);

        assert!(list.remove("missing").is_none());
    }

    #[test]
    fn test_late_response_is_ignored() {
        let mut list = ListView::new();
        let first = list.begin_load();
        let second = list.begin_load();

        assert!(list.apply_load(second, Some(catalog())));
        assert!(!list.apply_load(first, Some(Vec::new())));
        assert_eq!(list.view().len(), 3);
    }

    #[test]
    fn test_discarded_page_ignores_pending_load() {
        let mut list: ListView<Product> = ListView::new();
        let ticket = list.begin_load();
        list.discard();

        assert!(!list.apply_load(ticket, Some(catalog())));
        assert!(!list.is_loaded());
        assert!(list.view().is_empty());
    }

    #[test]
    fn test_failed_load_yields_empty_view() {
        let mut list: ListView<Product> =
            ListView::with_criteria(FilterCriteria::new().with_term("camera"));
        let ticket = list.begin_load();
        assert!(list.apply_load(ticket, None));

        assert!(list.view().is_empty());
        assert!(list.source().is_empty());
    }

    #[test]
    fn test_options_come_from_current_collection() {
        let mut list = ListView::new();
        let ticket = list.begin_load();
        list.apply_load(ticket, Some(catalog()));

        assert_eq!(
            list.options(FilterField::Brand),
            vec!["Dahua", "Hikvision", "TP-Link"]
        );

        list.set_criteria(FilterCriteria::new().with_brand("TP-Link"));
        list.remove("p2");
        assert!(list.view().is_empty());
        assert_eq!(
            list.options(FilterField::Brand),
            vec!["Dahua", "Hikvision", "TP-Link"]
        );

        list.clear_criteria();
        assert_eq!(list.options(FilterField::Brand), vec!["Dahua", "Hikvision"]);
    }

    #[test]
    fn test_selected_option_matches_case_insensitively() {
        let mut list = ListView::with_criteria(FilterCriteria::new().with_brand("dahua"));
        let ticket = list.begin_load();
        list.apply_load(ticket, Some(catalog()));

        assert_eq!(ids(list.view()), vec!["p3"]);
        assert_eq!(
            list.options(FilterField::Brand),
            vec!["Dahua", "Hikvision", "TP-Link"]
        );
    }
}
