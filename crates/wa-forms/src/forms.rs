// File: src/forms.rs
// Purpose: The application's forms and whole-form validation

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use wa_validation::{Field, FieldValue, Rules, ValidationInput, ValidationResult};

use crate::mode::FormMode;
use crate::state::ValidationState;

/// A submitted form whose fields are validated together.
///
/// Every field is validated and recorded; within a field the first failing
/// check wins.
pub trait Form {
    /// One input per validated field, in display order
    fn inputs(&self) -> Vec<ValidationInput>;

    /// Validate every field without recording anything
    fn results(&self, rules: &Rules) -> Vec<(Field, ValidationResult)> {
        self.inputs()
            .into_iter()
            .map(|input| (input.field(), input.validate_with(rules)))
            .collect()
    }

    /// Validate every field into `state`; true when all fields pass
    fn validate(&self, rules: &Rules, state: &mut ValidationState) -> bool {
        let mut all_valid = true;
        for (field, result) in self.results(rules) {
            all_valid &= result.is_ok();
            state.record(field, &result);
        }
        all_valid
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginForm {
    pub email: FieldValue,
    pub password: FieldValue,
}

impl Form for LoginForm {
    fn inputs(&self) -> Vec<ValidationInput> {
        vec![
            ValidationInput::Email(self.email.clone()),
            ValidationInput::Password(self.password.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterForm {
    pub email: FieldValue,
    pub password: FieldValue,
    pub confirm_password: FieldValue,
}

impl Form for RegisterForm {
    fn inputs(&self) -> Vec<ValidationInput> {
        vec![
            ValidationInput::Email(self.email.clone()),
            ValidationInput::Password(self.password.clone()),
            ValidationInput::ConfirmPassword {
                password: self.password.clone(),
                confirm_password: self.confirm_password.clone(),
            },
        ]
    }
}

/// "My Info" page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileForm {
    pub name: FieldValue,
    pub weight: FieldValue,
}

impl Form for ProfileForm {
    fn inputs(&self) -> Vec<ValidationInput> {
        vec![
            ValidationInput::Name(self.name.clone()),
            ValidationInput::Weight(self.weight.clone()),
        ]
    }
}

/// "Add custom measure" page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeasureForm {
    pub measure: FieldValue,
}

impl Form for MeasureForm {
    fn inputs(&self) -> Vec<ValidationInput> {
        vec![ValidationInput::Measure(self.measure.clone())]
    }
}

/// Every form the application submits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
    Profile,
    Measure,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Register => "register",
            FormKind::Profile => "profile",
            FormKind::Measure => "measure",
        }
    }

    /// Parse a JSON object into this kind of form
    pub fn parse_payload(&self, payload: serde_json::Value) -> Result<Box<dyn Form>, FormError> {
        let form: Box<dyn Form> = match self {
            FormKind::Login => Box::new(serde_json::from_value::<LoginForm>(payload)?),
            FormKind::Register => Box::new(serde_json::from_value::<RegisterForm>(payload)?),
            FormKind::Profile => Box::new(serde_json::from_value::<ProfileForm>(payload)?),
            FormKind::Measure => Box::new(serde_json::from_value::<MeasureForm>(payload)?),
        };
        Ok(form)
    }

    /// Validate a JSON payload field by field
    pub fn validate_payload(
        &self,
        payload: serde_json::Value,
        rules: &Rules,
    ) -> Result<BTreeMap<Field, ValidationResult>, FormError> {
        let form = self.parse_payload(payload)?;
        Ok(form.results(rules).into_iter().collect())
    }
}

impl From<FormMode> for FormKind {
    fn from(mode: FormMode) -> Self {
        match mode {
            FormMode::Login => FormKind::Login,
            FormMode::Register => FormKind::Register,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "login" => Ok(FormKind::Login),
            "register" => Ok(FormKind::Register),
            "profile" => Ok(FormKind::Profile),
            "measure" => Ok(FormKind::Measure),
            _ => Err(FormError::UnknownKind(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form '{0}' (expected login, register, profile or measure)")]
    UnknownKind(String),
    #[error("form payload must be a JSON object: {0}")]
    Payload(#[from] serde_json::Error),
}
