// Catalog - Admin dashboard statistics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Enquiry, Product, PRODUCT_CATEGORIES};

/// How many enquiries the dashboard lists as "recent"
pub const RECENT_ENQUIRY_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_enquiries: usize,
    pub today_enquiries: usize,
    pub total_products: usize,
    pub active_categories: usize,
    pub recent_enquiries: Vec<Enquiry>,
}

/// Summarize the enquiry and product collections as of `today` (UTC calendar date)
pub fn dashboard_stats(enquiries: &[Enquiry], products: &[Product], today: NaiveDate) -> DashboardStats {
    let today_enquiries = enquiries
        .iter()
        .filter(|e| e.created_at.map(|at| at.date_naive()) == Some(today))
        .count();

    DashboardStats {
        total_enquiries: enquiries.len(),
        today_enquiries,
        total_products: products.len(),
        active_categories: PRODUCT_CATEGORIES.len(),
        recent_enquiries: enquiries.iter().take(RECENT_ENQUIRY_LIMIT).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn enquiry_at(id: &str, day: u32) -> Enquiry {
        let mut enquiry = Enquiry::new(id, format!("Customer {}", id));
        enquiry.created_at = Some(Utc.with_ymd_and_hms(2024, 6, day, 9, 30, 0).unwrap());
        enquiry
    }

    #[test]
    fn test_counts_today_and_recent() {
        let mut enquiries: Vec<Enquiry> = (1..=7).map(|i| enquiry_at(&format!("e{}", i), i)).collect();
        enquiries.push(enquiry_at("e8", 7));
        enquiries.push(Enquiry::new("e9", "No date"));

        let products = vec![Product::new("p1", "Camera")];
        let today = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();

        let stats = dashboard_stats(&enquiries, &products, today);
        assert_eq!(stats.total_enquiries, 9);
        assert_eq!(stats.today_enquiries, 2);
        assert_eq!(stats.total_products, 1);
        assert_eq!(stats.active_categories, 7);

        let recent: Vec<&str> = stats.recent_enquiries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(recent, vec!["e1", "e2", "e3", "e4", "e5"]);
    }

    #[test]
    fn test_empty_collections() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let stats = dashboard_stats(&[], &[], today);
        assert_eq!(stats.total_enquiries, 0);
        assert_eq!(stats.today_enquiries, 0);
        assert!(stats.recent_enquiries.is_empty());
    }
}
