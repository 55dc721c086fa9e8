//! E-mail validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidationError, ValidationResult};
use crate::value::FieldValue;
use crate::whitespace::WHITESPACE_CLASS;

/// `local@domain.tld`: one `@`, no whitespace, a dot after the `@`
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{}]+", WHITESPACE_CLASS);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

/// Structural e-mail check, no presence or type handling
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates the e-mail field.
///
/// # Examples
/// ```
/// use wa_validation::validate_email;
/// assert!(validate_email("user@example.com").is_ok());
/// assert_eq!(validate_email(123).unwrap_err().to_string(), "E-mail must be a string");
/// ```
pub fn validate_email(value: impl Into<FieldValue>) -> ValidationResult {
    check_email(&value.into())
}

pub(crate) fn check_email(value: &FieldValue) -> ValidationResult {
    if !value.is_truthy() {
        return Err(ValidationError::EmailMissing);
    }
    let email = value.as_text().ok_or(ValidationError::EmailNotText)?;

    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}
