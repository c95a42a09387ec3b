//! Field-level validity predicates for contact email and phone values.
//!
//! Each predicate comes in two shapes: a boolean check (`is_valid_*`) that
//! treats an absent value as invalid, and a `validate_*` form that returns
//! [`CoreError::Validation`] with a human-readable reason.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Longest email address accepted, in characters.
pub const MAX_EMAIL_LEN: usize = 256;

/// Reason returned when an email fails validation.
pub const EMAIL_REASON: &str = "Invalid email format";

/// Reason returned when a phone number fails validation.
pub const PHONE_REASON: &str = "Phone number must be in the format xxx-xxx-xxxx";

/// `local@label.label[.label...]`: no whitespace anywhere, exactly one `@`,
/// and non-empty dot-separated domain labels.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$").expect("valid regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("valid regex"));

/// Returns `true` if `email` is a well-formed `local@domain.tld` address.
///
/// Case is accepted as-is.
pub fn is_valid_email(email: Option<&str>) -> bool {
    match email {
        Some(value) => value.chars().count() <= MAX_EMAIL_LEN && EMAIL_RE.is_match(value),
        None => false,
    }
}

/// Returns `true` if `phone` is exactly `ddd-ddd-dddd`.
pub fn is_valid_phone(phone: Option<&str>) -> bool {
    phone.is_some_and(|value| PHONE_RE.is_match(value))
}

/// Validate an email value, returning the rejection reason on failure.
pub fn validate_email(email: Option<&str>) -> Result<(), CoreError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CoreError::Validation(EMAIL_REASON.to_string()))
    }
}

/// Validate a phone value, returning the rejection reason on failure.
pub fn validate_phone(phone: Option<&str>) -> Result<(), CoreError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(CoreError::Validation(PHONE_REASON.to_string()))
    }
}

/// Validate the optional contact fields of a create or replace payload.
///
/// Absent and empty values are allowed; anything else must pass its predicate.
pub fn validate_contact_fields(
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(email) = email.filter(|e| !e.is_empty()) {
        validate_email(Some(email))?;
    }
    if let Some(phone) = phone.filter(|p| !p.is_empty()) {
        validate_phone(Some(phone))?;
    }
    Ok(())
}
