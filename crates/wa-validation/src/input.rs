// File: src/input.rs
// Purpose: Field-keyed dispatch over the validators

use crate::error::{Field, ValidationResult};
use crate::rules::Rules;
use crate::value::FieldValue;

/// One field's raw input, tagged with the field it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationInput {
    Email(FieldValue),
    Password(FieldValue),
    /// Confirmation is checked against the password it must repeat
    ConfirmPassword {
        password: FieldValue,
        confirm_password: FieldValue,
    },
    Name(FieldValue),
    Weight(FieldValue),
    Measure(FieldValue),
}

impl ValidationInput {
    pub fn field(&self) -> Field {
        match self {
            ValidationInput::Email(_) => Field::Email,
            ValidationInput::Password(_) => Field::Password,
            ValidationInput::ConfirmPassword { .. } => Field::ConfirmPassword,
            ValidationInput::Name(_) => Field::Name,
            ValidationInput::Weight(_) => Field::Weight,
            ValidationInput::Measure(_) => Field::Measure,
        }
    }

    /// Validates with the default rules
    pub fn validate(&self) -> ValidationResult {
        self.validate_with(&Rules::default())
    }

    pub fn validate_with(&self, rules: &Rules) -> ValidationResult {
        let result = match self {
            ValidationInput::Email(v) => rules.validate_email(v),
            ValidationInput::Password(v) => rules.validate_password(v),
            ValidationInput::ConfirmPassword {
                password,
                confirm_password,
            } => rules.validate_password_equality(password, confirm_password),
            ValidationInput::Name(v) => rules.validate_name(v),
            ValidationInput::Weight(v) => rules.validate_weight(v),
            ValidationInput::Measure(v) => rules.validate_measure(v),
        };

        tracing::trace!(field = %self.field(), valid = result.is_ok(), "validated field");
        result
    }
}

/// Builds the input for `field` from a single value.
///
/// For `ConfirmPassword` the password defaults to `Undefined`; use
/// [`ValidationInput::ConfirmPassword`] directly to compare against a value.
pub fn input_for(field: Field, value: FieldValue) -> ValidationInput {
    match field {
        Field::Email => ValidationInput::Email(value),
        Field::Password => ValidationInput::Password(value),
        Field::ConfirmPassword => ValidationInput::ConfirmPassword {
            password: FieldValue::Undefined,
            confirm_password: value,
        },
        Field::Name => ValidationInput::Name(value),
        Field::Weight => ValidationInput::Weight(value),
        Field::Measure => ValidationInput::Measure(value),
    }
}
