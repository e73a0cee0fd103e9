//! Utility functions
//!
//! Pure utility functions for booking-form validation. These modules
//! contain stateless helpers used by form-handling code.

pub mod validation;
