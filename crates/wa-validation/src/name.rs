//! Name validation

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidationError, ValidationResult};
use crate::value::FieldValue;
use crate::whitespace::{self, WHITESPACE_CLASS};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{}]{{2,}}", WHITESPACE_CLASS)).expect("whitespace pattern is valid")
});

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ,.'-]+$").expect("name pattern is valid"));

/// Removes every run of two or more whitespace characters, then trims.
///
/// Runs are deleted, not collapsed to a single space:
/// `"Mary  Ann"` normalizes to `"MaryAnn"`.
pub fn normalize_name(name: &str) -> Cow<'_, str> {
    match WHITESPACE_RUN.replace_all(name, "") {
        Cow::Borrowed(s) => Cow::Borrowed(whitespace::trim(s)),
        Cow::Owned(s) => Cow::Owned(whitespace::trim(&s).to_string()),
    }
}

/// Letters, space, comma, period, apostrophe and hyphen only
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(&normalize_name(name))
}

pub fn validate_name(value: impl Into<FieldValue>) -> ValidationResult {
    check_name(&value.into())
}

pub(crate) fn check_name(value: &FieldValue) -> ValidationResult {
    if !value.is_truthy() {
        return Err(ValidationError::NameMissing);
    }
    let name = value.as_text().ok_or(ValidationError::NameNotText)?;

    if is_valid_name(name) {
        Ok(())
    } else {
        Err(ValidationError::NameInvalid)
    }
}
