// File: src/error.rs
// Purpose: Validation failures and the fields they belong to

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Outcome of validating one field: `Ok(())` when valid.
pub type ValidationResult = Result<(), ValidationError>;

/// Why a field value was rejected.
///
/// The `Display` text is the message shown next to the form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("No e-mail was provided")]
    EmailMissing,
    #[error("E-mail must be a string")]
    EmailNotText,
    #[error("Invalid user e-mail")]
    EmailInvalid,

    #[error("No password was provided")]
    PasswordMissing,
    #[error("Password must be a string")]
    PasswordNotText,
    #[error(
        "Weak user password. A Password must have 8 characters length, at least one \
         uppercase letter, one lowercase letter, one number and one special case letter"
    )]
    PasswordWeak,

    #[error("Confirm password is empty")]
    ConfirmPasswordEmpty,
    #[error("Password and Confirm Password fields must be the same")]
    PasswordMismatch,

    #[error("No name was provided")]
    NameMissing,
    #[error("Name must be a string")]
    NameNotText,
    #[error("Invalid user name")]
    NameInvalid,

    #[error("No measure was provided")]
    MeasureMissing,
    #[error("Measure must be a number")]
    MeasureNotNumber,
    #[error("Invalid measure")]
    MeasureInvalid,

    #[error("No weight was provided")]
    WeightMissing,
    #[error("Weight must be a number")]
    WeightNotNumber,
    #[error("Invalid weight")]
    WeightInvalid,
}

impl ValidationError {
    /// Field this error is reported against
    pub fn field(&self) -> Field {
        use ValidationError::*;
        match self {
            EmailMissing | EmailNotText | EmailInvalid => Field::Email,
            PasswordMissing | PasswordNotText | PasswordWeak => Field::Password,
            ConfirmPasswordEmpty | PasswordMismatch => Field::ConfirmPassword,
            NameMissing | NameNotText | NameInvalid => Field::Name,
            MeasureMissing | MeasureNotNumber | MeasureInvalid => Field::Measure,
            WeightMissing | WeightNotNumber | WeightInvalid => Field::Weight,
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Convert a result into its message-or-`false` JSON form
pub fn result_to_json(result: &ValidationResult) -> serde_json::Value {
    match result {
        Ok(()) => serde_json::Value::Bool(false),
        Err(e) => serde_json::Value::String(e.to_string()),
    }
}

/// Form fields that have validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    Name,
    Weight,
    Measure,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Name,
        Field::Weight,
        Field::Measure,
    ];

    /// Field name as used in form markup and JSON payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Name => "name",
            Field::Weight => "weight",
            Field::Measure => "measure",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the camelCase name and the kebab/snake spellings used by
    /// HTML ids (`confirm-password`, `confirm_password`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "confirmPassword" | "confirm-password" | "confirm_password" => {
                Ok(Field::ConfirmPassword)
            }
            "name" => Ok(Field::Name),
            "weight" => Ok(Field::Weight),
            "measure" => Ok(Field::Measure),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_password_message_is_exact() {
        assert_eq!(
            ValidationError::PasswordWeak.to_string(),
            "Weak user password. A Password must have 8 characters length, at least one uppercase letter, one lowercase letter, one number and one special case letter"
        );
    }

    #[test]
    fn test_error_field() {
        assert_eq!(ValidationError::PasswordMismatch.field(), Field::ConfirmPassword);
        assert_eq!(ValidationError::WeightInvalid.field(), Field::Weight);
    }

    #[test]
    fn test_result_to_json() {
        assert_eq!(result_to_json(&Ok(())), serde_json::json!(false));
        assert_eq!(
            result_to_json(&Err(ValidationError::NameInvalid)),
            serde_json::json!("Invalid user name")
        );
    }

    #[test]
    fn test_field_round_trip_names() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!("confirm-password".parse::<Field>(), Ok(Field::ConfirmPassword));
        assert!("age".parse::<Field>().is_err());
    }
}
