//! Water Accountant validation rules
//!
//! Pure field validators for the login, register and profile forms.
//! Each validator takes a raw field value and returns `Ok(())` when the value
//! is acceptable, or a [`ValidationError`] whose `Display` text is the message
//! shown next to the field. The first failing check wins.
//!
//! Used by the form state crate, the WASM bindings and the CLI.

pub mod email;
pub mod equality;
pub mod error;
pub mod input;
pub mod name;
pub mod numeric;
pub mod password;
pub mod rules;
pub mod value;
pub mod whitespace;

// Re-export all validators
pub use email::*;
pub use equality::*;
pub use error::{result_to_json, Field, UnknownField, ValidationError, ValidationResult};
pub use input::{input_for, ValidationInput};
pub use name::*;
pub use numeric::*;
pub use password::*;
pub use rules::Rules;
pub use value::FieldValue;
