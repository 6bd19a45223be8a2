//! Admin dashboard summary

use chrono::Utc;

use crate::catalog::{dashboard_stats, DashboardStats};
use crate::state::AppState;

/// Enquiry and product counts as of today (UTC)
pub async fn dashboard_summary(state: &AppState) -> Result<DashboardStats, String> {
    let (enquiries, products) = tokio::try_join!(
        state.api().list_enquiries(),
        state.api().list_products(),
    )
    .map_err(|e| e.to_string())?;

    Ok(dashboard_stats(&enquiries, &products, Utc::now().date_naive()))
}
