// File: src/mode.rs
// Purpose: The Login / Register switch at the top of the home page

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wa_validation::Field;

/// Which of the two account forms is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

impl FormMode {
    pub const ALL: [FormMode; 2] = [FormMode::Login, FormMode::Register];

    /// Label shown on the switch button
    pub fn identifier(&self) -> &'static str {
        match self {
            FormMode::Login => "Login",
            FormMode::Register => "Register",
        }
    }

    /// Fields the mode's form submits, in display order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormMode::Login => &[Field::Email, Field::Password],
            FormMode::Register => &[Field::Email, Field::Password, Field::ConfirmPassword],
        }
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form mode '{0}'")]
pub struct UnknownMode(pub String);

impl FromStr for FormMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormMode::ALL
            .into_iter()
            .find(|mode| mode.identifier().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Two-option toggle; exactly one option is checked at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSwitch {
    checked: FormMode,
}

impl FormSwitch {
    pub fn new(checked: FormMode) -> Self {
        Self { checked }
    }

    pub fn checked(&self) -> FormMode {
        self.checked
    }

    /// Each option with its checked flag, in display order
    pub fn options(&self) -> [(FormMode, bool); 2] {
        FormMode::ALL.map(|mode| (mode, mode == self.checked))
    }

    pub fn select(&mut self, mode: FormMode) {
        if mode != self.checked {
            tracing::debug!(from = %self.checked, to = %mode, "switching form mode");
        }
        self.checked = mode;
    }

    pub fn select_identifier(&mut self, identifier: &str) -> Result<FormMode, UnknownMode> {
        let mode = identifier.parse()?;
        self.select(mode);
        Ok(mode)
    }

    /// Keyboard activation of a switch button; only Enter selects.
    ///
    /// Returns whether the key changed the selection.
    pub fn handle_key(&mut self, mode: FormMode, key: &str) -> bool {
        if key != "Enter" {
            return false;
        }
        let changed = mode != self.checked;
        self.select(mode);
        changed
    }
}
