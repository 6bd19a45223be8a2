// Catalog module
// In-memory filtering, list page state and dashboard statistics

pub mod filter;
pub mod stats;
pub mod view;

pub use filter::{distinct_values, filter, FilterCriteria, FilterField, Filterable};
pub use stats::{dashboard_stats, DashboardStats};
pub use view::{ListView, LoadTicket};
