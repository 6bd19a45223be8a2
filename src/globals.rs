//! Process-wide session state for the command-line front end
//!
//! The API client reports an expired session through its injected callback;
//! the binary's callback records it here so the running command can stop and
//! tell the user where to go next.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use once_cell::sync::Lazy;

/// Set once the backend has rejected the stored credential
pub static SESSION_EXPIRED: AtomicBool = AtomicBool::new(false);

/// Route the user should be sent to, if any
pub static PENDING_REDIRECT: Lazy<Mutex<Option<String>>> = Lazy::new(|| Mutex::new(None));

/// Record an expired session and the route to continue at
pub fn request_redirect(route: &str) {
    SESSION_EXPIRED.store(true, Ordering::SeqCst);
    match PENDING_REDIRECT.lock() {
        Ok(mut guard) => *guard = Some(route.to_string()),
        Err(e) => log::error!("Lock error recording redirect: {}", e),
    }
}

/// Take the pending redirect, leaving none behind
pub fn take_redirect() -> Option<String> {
    let mut guard = PENDING_REDIRECT.lock().ok()?;
    guard.take()
}

pub fn is_session_expired() -> bool {
    SESSION_EXPIRED.load(Ordering::SeqCst)
}
