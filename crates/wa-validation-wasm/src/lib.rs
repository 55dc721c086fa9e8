//! Water Accountant Validation WASM
//!
//! WebAssembly bindings for the form validators.
//! Every validator returns `false` when the value is valid, or the error
//! message string to show next to the field.

use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wa_forms::FormKind;
use wa_validation::{self as validation, Field, FieldValue, Rules, ValidationResult};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Convert a JS value into the validators' dynamic value
fn to_field_value(value: &JsValue) -> FieldValue {
    if value.is_undefined() {
        FieldValue::Undefined
    } else if value.is_null() {
        FieldValue::Null
    } else if let Some(b) = value.as_bool() {
        FieldValue::Bool(b)
    } else if let Some(n) = value.as_f64() {
        FieldValue::Number(n)
    } else if let Some(s) = value.as_string() {
        FieldValue::Text(s)
    } else {
        // Arrays, objects and functions: truthy, neither text nor number
        FieldValue::Object(BTreeMap::new())
    }
}

fn to_js(result: ValidationResult) -> JsValue {
    match result {
        Ok(()) => JsValue::FALSE,
        Err(e) => JsValue::from_str(&e.to_string()),
    }
}

/// Validate a whole form payload into `field -> false | message`
pub fn form_results(
    kind: &str,
    payload: serde_json::Value,
) -> Result<BTreeMap<&'static str, serde_json::Value>, wa_forms::FormError> {
    let kind: FormKind = kind.parse()?;
    let results = kind.validate_payload(payload, &Rules::default())?;
    Ok(results
        .iter()
        .map(|(field, result)| (field.as_str(), validation::result_to_json(result)))
        .collect())
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(email: JsValue) -> JsValue {
    to_js(validation::validate_email(to_field_value(&email)))
}

#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(password: JsValue) -> JsValue {
    to_js(validation::validate_password(to_field_value(&password)))
}

#[wasm_bindgen(js_name = validatePasswordEquality)]
pub fn validate_password_equality_js(password: JsValue, confirm_password: JsValue) -> JsValue {
    to_js(validation::validate_password_equality(
        to_field_value(&password),
        to_field_value(&confirm_password),
    ))
}

#[wasm_bindgen(js_name = validateName)]
pub fn validate_name_js(name: JsValue) -> JsValue {
    to_js(validation::validate_name(to_field_value(&name)))
}

#[wasm_bindgen(js_name = validateWeight)]
pub fn validate_weight_js(weight: JsValue) -> JsValue {
    to_js(validation::validate_weight(to_field_value(&weight)))
}

#[wasm_bindgen(js_name = validateMeasure)]
pub fn validate_measure_js(measure: JsValue) -> JsValue {
    to_js(validation::validate_measure(to_field_value(&measure)))
}

/// Validate a single field by name
///
/// # Example (JavaScript)
/// ```javascript
/// validateField('weight', 70);        // false
/// validateField('weight', '70');      // "Weight must be a number"
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: JsValue) -> Result<JsValue, JsValue> {
    let field: Field = field_name.parse().map_err(|e: validation::UnknownField| {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        JsValue::from_str(&e.to_string())
    })?;

    Ok(to_js(validation::input_for(field, to_field_value(&value)).validate()))
}

/// Strength tier of a password: "weak", "medium" or "strong"
#[wasm_bindgen(js_name = passwordStrength)]
pub fn password_strength_js(password: &str) -> String {
    validation::password_strength(password).to_string()
}

/// Validate a whole form
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateForm('register', {
///     email: 'user@example.com',
///     password: 'Aa1!Aa1!',
///     confirmPassword: 'Aa1!Aa1!'
/// });
/// // { email: false, password: false, confirmPassword: false }
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(kind: &str, data: JsValue) -> Result<JsValue, JsValue> {
    let payload: serde_json::Value = serde_wasm_bindgen::from_value(data)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form data: {}", e)))?;

    let results = form_results(kind, payload).map_err(|e| JsValue::from_str(&e.to_string()))?;

    results
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(Into::into)
}
