pub mod check;
pub mod form;
pub mod strength;

use colored::Colorize;
use wa_validation::{Field, FieldValue, ValidationResult};

/// Read a command-line value as JSON when it parses, otherwise as text.
///
/// `70` is a number, `"70"` (quotes included) and `seventy` are text.
pub fn parse_value(raw: &str) -> FieldValue {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(FieldValue::from)
        .unwrap_or_else(|_| FieldValue::Text(raw.to_string()))
}

/// One line per field: `field: ok` or `field: message`
pub fn format_result(field: Field, result: &ValidationResult) -> String {
    match result {
        Ok(()) => format!("{}: {}", field, "ok".green()),
        Err(e) => format!("{}: {}", field, e.to_string().red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("70"), FieldValue::Number(70.0));
        assert_eq!(parse_value("\"70\""), FieldValue::Text("70".to_string()));
        assert_eq!(parse_value("seventy"), FieldValue::Text("seventy".to_string()));
        assert_eq!(parse_value("null"), FieldValue::Null);
        assert_eq!(parse_value(""), FieldValue::Text(String::new()));
    }

    #[test]
    fn test_format_result() {
        colored::control::set_override(false);
        assert_eq!(format_result(Field::Weight, &Ok(())), "weight: ok");
        assert_eq!(
            format_result(Field::Weight, &Err(wa_validation::ValidationError::WeightInvalid)),
            "weight: Invalid weight"
        );
    }
}
