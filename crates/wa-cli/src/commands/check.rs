use anyhow::{Context, Result};
use wa_validation::{input_for, result_to_json, Field, FieldValue, Rules, ValidationInput};

use super::{format_result, parse_value};

/// Build the input for a single `wa check` invocation
pub fn build_input(field: Field, value: &str, password: Option<&str>) -> ValidationInput {
    let value = parse_value(value);
    match field {
        Field::ConfirmPassword => ValidationInput::ConfirmPassword {
            password: password.map(parse_value).unwrap_or(FieldValue::Undefined),
            confirm_password: value,
        },
        other => input_for(other, value),
    }
}

pub fn execute(
    rules: &Rules,
    field: &str,
    value: &str,
    password: Option<&str>,
    json: bool,
) -> Result<bool> {
    let field: Field = field.parse().context("Cannot validate field")?;
    if password.is_some() && field != Field::ConfirmPassword {
        tracing::warn!(%field, "--password only applies to confirm-password, ignoring");
    }

    let result = build_input(field, value, password).validate_with(rules);

    if json {
        let mut output = serde_json::Map::new();
        output.insert(field.as_str().to_string(), result_to_json(&result));
        println!("{}", serde_json::Value::Object(output));
    } else {
        println!("{}", format_result(field, &result));
    }

    Ok(result.is_ok())
}
