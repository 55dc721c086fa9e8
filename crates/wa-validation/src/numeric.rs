//! Numeric validation functions

use crate::error::{ValidationError, ValidationResult};
use crate::rules::Rules;
use crate::value::FieldValue;

/// Validates a body measure: any positive number.
///
/// Zero is treated as "not provided", not as an out-of-range value.
pub fn validate_measure(value: impl Into<FieldValue>) -> ValidationResult {
    check_measure(&value.into())
}

pub(crate) fn check_measure(value: &FieldValue) -> ValidationResult {
    if !value.is_truthy() {
        return Err(ValidationError::MeasureMissing);
    }
    let measure = value.as_number().ok_or(ValidationError::MeasureNotNumber)?;

    if measure <= 0.0 {
        return Err(ValidationError::MeasureInvalid);
    }
    Ok(())
}

/// Validates a weight: greater than zero and at most 500.
pub fn validate_weight(value: impl Into<FieldValue>) -> ValidationResult {
    check_weight(&value.into(), Rules::default().max_weight)
}

pub(crate) fn check_weight(value: &FieldValue, max_weight: f64) -> ValidationResult {
    if !value.is_truthy() {
        return Err(ValidationError::WeightMissing);
    }
    let weight = value.as_number().ok_or(ValidationError::WeightNotNumber)?;

    if weight <= 0.0 || weight > max_weight {
        return Err(ValidationError::WeightInvalid);
    }
    Ok(())
}
