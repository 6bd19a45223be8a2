// Catalog models - Re-exports all backend record types
//
// This module is split into focused files by domain:
// - product.rs: Catalog products and the admin product form
// - enquiry.rs: Contact-form enquiries
// - service.rs: Company services (installation, AMC, ...)
// - user.rs: User profiles and auth payloads
// - serde_util.rs: Lenient decoders for loosely typed fields

mod enquiry;
mod product;
mod serde_util;
mod service;
mod user;

pub use enquiry::{Enquiry, EnquiryForm};
pub use product::{Product, ProductForm, PRODUCT_CATEGORIES};
pub use service::{Service, ServiceForm};
pub use user::{ApiMessage, AuthResponse, Credentials, ProfileForm, SignupForm, UserProfile};

/// A backend record addressable by its identifier
pub trait Record {
    fn id(&self) -> &str;
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
