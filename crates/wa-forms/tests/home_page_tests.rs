//! Integration tests for wa-forms
//!
//! Walks the home page flow: switch modes, submit, show errors, reset.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use wa_forms::render::render_home;
use wa_forms::wa_validation::{Field, Rules};
use wa_forms::*;

#[test]
fn test_register_flow() {
    let rules = Rules::default();
    let mut switch = FormSwitch::default();
    let mut state = ValidationState::new();

    switch.select_identifier("Register").unwrap();
    let kind = FormKind::from(switch.checked());
    let form = kind
        .parse_payload(json!({
            "email": "ana@example.com",
            "password": "weak",
            "confirmPassword": ""
        }))
        .unwrap();

    assert!(!form.validate(&rules, &mut state));

    let html = render_home(&switch, &state).into_string();
    assert!(html.contains("Weak user password."));
    assert!(html.contains("Confirm password is empty"));

    let form = kind
        .parse_payload(json!({
            "email": "ana@example.com",
            "password": "Aa1!Aa1!",
            "confirmPassword": "Aa1!Aa1!"
        }))
        .unwrap();
    assert!(form.validate(&rules, &mut state));
    assert!(state.errors().is_empty());
}

#[test]
fn test_custom_message_survives_revalidation_until_reset() {
    let rules = Rules::default();
    let mut state = ValidationState::new();
    let form = LoginForm {
        email: "ana@example.com".into(),
        password: "Aa1!aaaa".into(),
    };

    assert!(form.validate(&rules, &mut state));
    state.set_custom_error_message(Field::Password, "Wrong password");
    form.validate(&rules, &mut state);
    assert_eq!(state.error(Field::Password), Some("Wrong password"));

    state.reset_validations();
    assert_eq!(state.error(Field::Password), None);
}

#[rstest]
#[case(FormKind::Profile, json!({"name": "O'Brien", "weight": 70}), vec![])]
#[case(FormKind::Profile, json!({"name": "John123", "weight": 501}), vec![Field::Name, Field::Weight])]
#[case(FormKind::Measure, json!({"measure": 0}), vec![Field::Measure])]
#[case(FormKind::Login, json!({}), vec![Field::Email, Field::Password])]
fn test_failing_fields(
    #[case] kind: FormKind,
    #[case] payload: serde_json::Value,
    #[case] failing: Vec<Field>,
) {
    let results = kind.validate_payload(payload, &Rules::default()).unwrap();
    let actual: Vec<Field> = results
        .into_iter()
        .filter(|(_, result)| result.is_err())
        .map(|(field, _)| field)
        .collect();
    assert_eq!(actual, failing);
}

#[test]
fn test_state_serializes_for_templates() {
    let mut state = ValidationState::new();
    state.record(Field::Email, &Ok(()));
    state.set_custom_error_message(Field::Email, "Taken");

    assert_eq!(
        serde_json::to_value(&state).unwrap(),
        json!({
            "statuses": { "email": { "isValid": true, "message": null } },
            "customValidations": { "email": "Taken" }
        })
    );
}
