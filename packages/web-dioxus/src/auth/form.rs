//! Login form validation, run before the allow-list is consulted.

use lazy_static::lazy_static;
use regex::Regex;

/// Shown when login fails for a reason the user cannot act on.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), FormError> {
    if email.is_empty() || password.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}
