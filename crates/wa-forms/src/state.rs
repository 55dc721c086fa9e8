// File: src/state.rs
// Purpose: Per-field validation results kept for display next to each input

use std::collections::BTreeMap;

use serde::Serialize;
use wa_validation::{Field, ValidationResult};

/// Last known validation outcome of one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStatus {
    /// `None` until the field has been validated
    pub is_valid: Option<bool>,
    pub message: Option<String>,
}

impl FieldStatus {
    pub fn from_result(result: &ValidationResult) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: Some(true),
                message: None,
            },
            Err(e) => Self {
                is_valid: Some(false),
                message: Some(e.to_string()),
            },
        }
    }
}

/// Validation results for a form, owned by the caller.
///
/// Validators never touch this; the caller records what they return.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationState {
    statuses: BTreeMap<Field, FieldStatus>,
    custom_validations: BTreeMap<Field, String>,
}

impl ValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the outcome of validating `field`
    pub fn record(&mut self, field: Field, result: &ValidationResult) {
        tracing::debug!(%field, valid = result.is_ok(), "recording validation result");
        self.statuses.insert(field, FieldStatus::from_result(result));
    }

    /// Status of a field; never-validated fields report the default status
    pub fn status(&self, field: Field) -> FieldStatus {
        self.statuses.get(&field).cloned().unwrap_or_default()
    }

    /// Message to show for a field. A custom message takes precedence.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.custom_validations
            .get(&field)
            .map(|s| s.as_str())
            .or_else(|| {
                self.statuses
                    .get(&field)
                    .and_then(|status| status.message.as_deref())
            })
    }

    /// Whether any field currently has a message to show
    pub fn has_errors(&self) -> bool {
        Field::ALL.iter().any(|field| self.error(*field).is_some())
    }

    /// True when no recorded field failed and no custom message is set
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// All fields with a message to show
    pub fn errors(&self) -> BTreeMap<Field, String> {
        Field::ALL
            .iter()
            .filter_map(|field| self.error(*field).map(|msg| (*field, msg.to_string())))
            .collect()
    }

    /// Attach a caller-supplied message to a field, such as a server rejection
    pub fn set_custom_error_message(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%field, %message, "setting custom error message");
        self.custom_validations.insert(field, message);
    }

    pub fn custom_validations(&self) -> &BTreeMap<Field, String> {
        &self.custom_validations
    }

    /// Drop custom messages; recorded results are kept
    pub fn reset_validations(&mut self) {
        tracing::debug!("resetting custom validations");
        self.custom_validations.clear();
    }

    /// Forget everything: recorded results and custom messages
    pub fn clear(&mut self) {
        tracing::debug!("clearing validation state");
        self.statuses.clear();
        self.custom_validations.clear();
    }
}
