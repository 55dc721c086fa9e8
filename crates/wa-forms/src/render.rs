// File: src/render.rs
// Purpose: Maud markup for the home page forms

use maud::{html, Markup};
use wa_validation::Field;

use crate::mode::{FormMode, FormSwitch};
use crate::state::ValidationState;

/// Radio group name shared by the switch inputs
const SWITCH_NAME: &str = "formType";

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Email => "E-mail",
        Field::Password => "Password",
        Field::ConfirmPassword => "Confirm Password",
        Field::Name => "Name",
        Field::Weight => "Weight",
        Field::Measure => "Measure",
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Password | Field::ConfirmPassword => "password",
        Field::Name => "text",
        Field::Weight | Field::Measure => "number",
    }
}

/// HTML id of a field's input (`confirm-password` rather than camelCase)
pub fn field_id(field: Field) -> &'static str {
    match field {
        Field::ConfirmPassword => "confirm-password",
        other => other.as_str(),
    }
}

/// One labelled input plus its current error message, if any
pub fn render_field(field: Field, state: &ValidationState) -> Markup {
    let id = field_id(field);
    let error = state.error(field);

    html! {
        label for=(id) {
            (field_label(field))
            input type=(input_type(field)) id=(id) name=(field.as_str())
                aria-invalid=[error.map(|_| "true")];
            @if let Some(message) = error {
                span class="field-error" role="alert" { (message) }
            }
        }
    }
}

/// Radio inputs and switch buttons for choosing Login or Register
pub fn render_switch(switch: &FormSwitch) -> Markup {
    html! {
        form class="form" {
            @for (mode, checked) in switch.options() {
                label for=(mode.identifier()) {
                    (mode.identifier())
                    input type="radio" id=(mode.identifier()) name=(SWITCH_NAME)
                        value=(mode.identifier()) checked[checked];
                }
            }
            div class="switch" {
                div class="switch__wrapper" {
                    @for (mode, checked) in switch.options() {
                        @let class = if checked {
                            "switch__button switch__button--selected"
                        } else {
                            "switch__button"
                        };
                        div class=(class) role="button" tabindex="0" data-mode=(mode.identifier()) {
                            (mode.identifier())
                        }
                    }
                    div class="switch__selection" {
                        (switch.checked().identifier())
                    }
                }
            }
        }
    }
}

/// The form for the checked mode, with recorded errors beside each field
pub fn render_account_form(mode: FormMode, state: &ValidationState) -> Markup {
    html! {
        form data-mode=(mode.identifier()) {
            @for field in mode.fields() {
                (render_field(*field, state))
            }
            input type="button" value=(mode.identifier());
        }
    }
}

/// Side menu entries
pub fn render_menu() -> Markup {
    html! {
        nav class="menu" {
            ul {
                li { "Home" }
                li { "Add custom measure" }
                li { "My Info" }
                li { "Logout" }
            }
        }
    }
}

/// Full home page body
pub fn render_home(switch: &FormSwitch, state: &ValidationState) -> Markup {
    html! {
        div class="home-container wrapper" {
            h1 class="logo" {
                span class="logo__larger-word" { "Water" }
                "Accountant"
            }
            (render_switch(switch))
            (render_account_form(switch.checked(), state))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wa_validation::ValidationError;

    #[test]
    fn test_login_page_shows_two_fields() {
        let html = render_home(&FormSwitch::default(), &ValidationState::new()).into_string();

        assert!(html.contains("<span class=\"logo__larger-word\">Water</span>Accountant"));
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("id=\"password\""));
        assert!(!html.contains("confirm-password"));
        assert!(html.contains("switch__button switch__button--selected\" role=\"button\" tabindex=\"0\" data-mode=\"Login\""));
    }

    #[test]
    fn test_register_page_shows_confirmation() {
        let switch = FormSwitch::new(FormMode::Register);
        let html = render_home(&switch, &ValidationState::new()).into_string();

        assert!(html.contains("id=\"confirm-password\""));
        assert!(html.contains("value=\"Register\""));
    }

    #[test]
    fn test_error_rendered_beside_field() {
        let mut state = ValidationState::new();
        state.record(Field::Email, &Err(ValidationError::EmailInvalid));

        let html = render_field(Field::Email, &state).into_string();
        assert!(html.contains("aria-invalid=\"true\""));
        assert!(html.contains("<span class=\"field-error\" role=\"alert\">Invalid user e-mail</span>"));

        let html = render_field(Field::Password, &state).into_string();
        assert!(!html.contains("field-error"));
    }

    #[test]
    fn test_checked_radio() {
        let html = render_switch(&FormSwitch::new(FormMode::Register)).into_string();
        assert!(html.contains("value=\"Register\" checked>"));
        assert!(html.contains("value=\"Login\">"));
    }

    #[test]
    fn test_menu_entries() {
        let html = render_menu().into_string();
        assert!(html.contains("<li>My Info</li>"));
        assert!(html.contains("<li>Add custom measure</li>"));
    }
}
