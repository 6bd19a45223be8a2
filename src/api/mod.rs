// Backend API layer
//
// - client.rs: HTTP transport, bearer token, 401 session purge
// - session.rs: credential store trait and the injected auth context
// - envelope.rs: payload normalization into typed values
// - error.rs: the single error type callers see
// - auth.rs, products.rs, services.rs, contact.rs, admin.rs: typed endpoints

mod admin;
mod auth;
pub mod client;
mod contact;
pub mod envelope;
pub mod error;
mod products;
mod services;
pub mod session;

pub use client::{ApiClient, ApiConfig, DEFAULT_API_URL};
pub use error::ApiError;
pub use session::{
    AuthContext, CredentialStore, MemoryCredentialStore, SessionExpiredHook, SIGN_IN_ROUTE,
    TOKEN_KEY, USER_KEY,
};
