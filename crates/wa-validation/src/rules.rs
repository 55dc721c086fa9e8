// File: src/rules.rs
// Purpose: Tunable constants shared by the field validators

use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::password::PasswordStrength;
use crate::value::FieldValue;
use crate::{email, equality, name, numeric, password};

/// Validation constants, loadable from the `[rules]` table of a config file.
///
/// `Rules::default()` gives the stock form behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Minimum password length for the medium and strong tiers, in UTF-16
    /// code units.
    ///
    /// Only the check changes; the weak-password message always reads
    /// "8 characters length".
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Characters that count as "special" in a password
    #[serde(default = "default_password_specials")]
    pub password_specials: String,

    /// Heaviest accepted weight (inclusive)
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,
}

fn default_min_password_length() -> usize {
    8
}

fn default_password_specials() -> String {
    "!@#$&*".to_string()
}

fn default_max_weight() -> f64 {
    500.0
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
            password_specials: default_password_specials(),
            max_weight: default_max_weight(),
        }
    }
}

impl Rules {
    pub fn validate_email(&self, value: &FieldValue) -> ValidationResult {
        email::check_email(value)
    }

    pub fn validate_password(&self, value: &FieldValue) -> ValidationResult {
        password::check_password(value, self)
    }

    pub fn password_strength(&self, password: &str) -> PasswordStrength {
        password::classify(password, self)
    }

    pub fn validate_password_equality(
        &self,
        password: &FieldValue,
        confirm_password: &FieldValue,
    ) -> ValidationResult {
        equality::check_password_equality(password, confirm_password)
    }

    pub fn validate_name(&self, value: &FieldValue) -> ValidationResult {
        name::check_name(value)
    }

    pub fn validate_measure(&self, value: &FieldValue) -> ValidationResult {
        numeric::check_measure(value)
    }

    pub fn validate_weight(&self, value: &FieldValue) -> ValidationResult {
        numeric::check_weight(value, self.max_weight)
    }
}
