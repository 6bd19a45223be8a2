//! Command handlers
//!
//! Each handler drives the API client (and, for auth, the local store) and
//! returns plain data; errors are flattened to display strings for the
//! front end.

pub mod auth;
pub mod dashboard;
pub mod enquiries;
pub mod products;
pub mod services;
pub mod users;
