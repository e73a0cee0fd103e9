//! bookform library
//!
//! Validation helpers for booking-form input plus the typed
//! configuration record the booking shell loads at start-up.
//! Modules are exposed for integration testing.

pub mod config;
pub mod utils;

// Re-export commonly used types and functions
pub use config::{Config, RemoteImagePattern};
pub use utils::validation::{
    emails_match, is_email, lookup_path, min_age, min_age_on, required_fields,
};
