//! Cross-field checks

use crate::error::{ValidationError, ValidationResult};
use crate::value::FieldValue;

/// Validates that the confirmation matches the password exactly.
///
/// Only the confirmation is checked for presence; the password itself is
/// validated separately.
pub fn validate_password_equality(
    password: impl Into<FieldValue>,
    confirm_password: impl Into<FieldValue>,
) -> ValidationResult {
    check_password_equality(&password.into(), &confirm_password.into())
}

pub(crate) fn check_password_equality(
    password: &FieldValue,
    confirm_password: &FieldValue,
) -> ValidationResult {
    if !confirm_password.is_truthy() {
        return Err(ValidationError::ConfirmPasswordEmpty);
    }
    if !password.strict_eq(confirm_password) {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}
