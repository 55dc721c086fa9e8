//! Password validation functions

use std::fmt;

use serde::Serialize;

use crate::error::{ValidationError, ValidationResult};
use crate::rules::Rules;
use crate::value::FieldValue;

/// Password strength tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    /// Below the medium tier; rejected
    Weak,
    /// Minimum length with one uppercase, lowercase, digit and special character
    Medium,
    /// Minimum length with two uppercase, two lowercase, two digits and a special character
    Strong,
}

impl PasswordStrength {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, PasswordStrength::Weak)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Default)]
struct CharCounts {
    length: usize,
    uppercase: usize,
    lowercase: usize,
    digits: usize,
    specials: usize,
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Classifies a password into a strength tier using the default rules
pub fn password_strength(password: &str) -> PasswordStrength {
    classify(password, &Rules::default())
}

pub(crate) fn classify(password: &str, rules: &Rules) -> PasswordStrength {
    // Passwords spanning several lines never qualify for a tier
    if password.chars().any(is_line_terminator) {
        return PasswordStrength::Weak;
    }

    // Length is measured in UTF-16 code units, as the browser counts it
    let counts = password.chars().fold(CharCounts::default(), |mut acc, c| {
        acc.length += c.len_utf16();
        if c.is_ascii_uppercase() {
            acc.uppercase += 1;
        } else if c.is_ascii_lowercase() {
            acc.lowercase += 1;
        } else if c.is_ascii_digit() {
            acc.digits += 1;
        } else if rules.password_specials.contains(c) {
            acc.specials += 1;
        }
        acc
    });

    if counts.length < rules.min_password_length || counts.specials == 0 {
        return PasswordStrength::Weak;
    }

    if counts.uppercase >= 2 && counts.lowercase >= 2 && counts.digits >= 2 {
        PasswordStrength::Strong
    } else if counts.uppercase >= 1 && counts.lowercase >= 1 && counts.digits >= 1 {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Weak
    }
}

/// Validates the password field: strong and medium passwords pass, weak ones fail.
pub fn validate_password(value: impl Into<FieldValue>) -> ValidationResult {
    check_password(&value.into(), &Rules::default())
}

pub(crate) fn check_password(value: &FieldValue, rules: &Rules) -> ValidationResult {
    if !value.is_truthy() {
        return Err(ValidationError::PasswordMissing);
    }
    let password = value.as_text().ok_or(ValidationError::PasswordNotText)?;

    if classify(password, rules).is_accepted() {
        Ok(())
    } else {
        Err(ValidationError::PasswordWeak)
    }
}
