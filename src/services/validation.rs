//! Contact form validation.
//!
//! Fails closed: any bad field blocks the submission. The caller shows one
//! generic message; the offending field names are only used for highlighting.

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;

use std::sync::OnceLock;

use regex::Regex;

use crate::state::form::{FieldKind, FormField};

/// Banner text for every validation failure.
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields correctly.";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_DIGITS_PATTERN: &str = r"^[1-9]\d{0,15}$";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid form fields: {}", .invalid.join(", "))]
pub struct ValidationError {
    /// Names of the failing fields, in form order, without repeats.
    pub invalid: Vec<String>,
}

/// Check required presence plus email and phone shape.
///
/// # Errors
///
/// Returns every failing field name when at least one check fails.
pub fn validate(fields: &[FormField]) -> Result<(), ValidationError> {
    let mut invalid: Vec<String> = Vec::new();
    for field in fields {
        if !field_is_valid(field) && !invalid.contains(&field.name) {
            invalid.push(field.name.clone());
        }
    }
    if invalid.is_empty() { Ok(()) } else { Err(ValidationError { invalid }) }
}

fn field_is_valid(field: &FormField) -> bool {
    if field.required && field.value.trim().is_empty() {
        return false;
    }
    // Shape checks only apply to filled-in controls.
    if field.value.is_empty() {
        return true;
    }
    match field.kind {
        FieldKind::Email => is_email(&field.value),
        FieldKind::Tel => is_phone(&field.value),
        FieldKind::Text | FieldKind::Select | FieldKind::TextArea => true,
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
#[must_use]
pub fn is_email(value: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Formatting characters are ignored; the remaining digits must number
/// 1 to 16 and not start with zero.
#[must_use]
pub fn is_phone(value: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    PATTERN
        .get_or_init(|| Regex::new(PHONE_DIGITS_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(&digits))
}
