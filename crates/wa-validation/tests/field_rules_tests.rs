//! Integration tests for wa-validation
//!
//! Exercises every field validator through the public API the forms use:
//! - Presence, type and structure checks, in that order
//! - Password strength tiers
//! - Cross-field password confirmation
//! - Numeric ranges
//! - Repeatability of results

use pretty_assertions::assert_eq;
use rstest::rstest;
use wa_validation::*;

const WEAK_MESSAGE: &str = "Weak user password. A Password must have 8 characters length, at least one uppercase letter, one lowercase letter, one number and one special case letter";

fn message(result: ValidationResult) -> Option<String> {
    result.err().map(|e| e.to_string())
}

#[rstest]
#[case("user@example.com")]
#[case("a@b.c")]
#[case("first.last+tag@sub.domain.org")]
#[case("weird!#chars@host.x")]
#[case("x@y.z.w")]
#[case("a@b..c")]
#[case("a@.b.c")]
#[case("a.@b.c.")]
#[case("!#$%&'*/=?^_`{|}~-@b.c")]
#[case("ünïcødé@dömäin.tld")]
#[case("a\u{85}b@c.d")]
fn test_email_accepts_structural_matches(#[case] email: &str) {
    assert_eq!(validate_email(email), Ok(()));
}

#[rstest]
#[case("a@b.")]
#[case("a@.b")]
#[case("a@b")]
#[case(".@b")]
#[case("a b@c.d")]
#[case("a@b .c")]
#[case("a\u{feff}@b.c")]
#[case("a@b\u{a0}.c")]
#[case("a@b@c.d")]
fn test_email_rejects_near_misses(#[case] email: &str) {
    assert_eq!(validate_email(email), Err(ValidationError::EmailInvalid));
}

#[test]
fn test_email_sweep_of_generated_addresses() {
    let locals = ["a", "first.last", "x+y", ".", "-_-", "1", "é"];
    let domains = ["b", "sub.domain", "..", "-x-", "0"];
    let tlds = ["c", "co.uk", ".", "x.", "ŭ"];
    let breakers = [" ", "\t", "\u{feff}", "\u{3000}", "@"];

    for local in locals {
        for domain in domains {
            for tld in tlds {
                let email = format!("{local}@{domain}.{tld}");
                assert_eq!(validate_email(email.as_str()), Ok(()), "{email:?}");

                for breaker in breakers {
                    let broken = format!("{local}{breaker}@{domain}.{tld}");
                    assert_eq!(
                        validate_email(broken.as_str()),
                        Err(ValidationError::EmailInvalid),
                        "{broken:?}"
                    );
                }
            }
        }
    }
}

#[rstest]
#[case(FieldValue::from(""), "No e-mail was provided")]
#[case(FieldValue::Null, "No e-mail was provided")]
#[case(FieldValue::Undefined, "No e-mail was provided")]
#[case(FieldValue::from(123), "E-mail must be a string")]
#[case(FieldValue::from("not-an-email"), "Invalid user e-mail")]
#[case(FieldValue::from("user@localhost"), "Invalid user e-mail")]
fn test_email_failures(#[case] value: FieldValue, #[case] expected: &str) {
    assert_eq!(message(validate_email(value)), Some(expected.to_string()));
}

#[rstest]
#[case("Aa1!Aa1!", PasswordStrength::Strong)]
#[case("Aa1!aaaa", PasswordStrength::Medium)]
#[case("weak", PasswordStrength::Weak)]
#[case("abcdefgh", PasswordStrength::Weak)]
#[case("ABcd12$$", PasswordStrength::Strong)]
fn test_password_tiers(#[case] password: &str, #[case] tier: PasswordStrength) {
    assert_eq!(password_strength(password), tier);
    assert_eq!(validate_password(password).is_ok(), tier.is_accepted());
}

#[test]
fn test_weak_password_message() {
    assert_eq!(message(validate_password("weak")), Some(WEAK_MESSAGE.to_string()));
}

#[rstest]
#[case(FieldValue::from(""), "No password was provided")]
#[case(FieldValue::from(42), "Password must be a string")]
fn test_password_presence_and_type(#[case] value: FieldValue, #[case] expected: &str) {
    assert_eq!(message(validate_password(value)), Some(expected.to_string()));
}

#[rstest]
#[case("x", "x", None)]
#[case("x", "y", Some("Password and Confirm Password fields must be the same"))]
#[case("x", "", Some("Confirm password is empty"))]
fn test_password_equality(
    #[case] password: &str,
    #[case] confirm: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(
        message(validate_password_equality(password, confirm)),
        expected.map(str::to_string)
    );
}

#[rstest]
#[case(FieldValue::from("O'Brien"), None)]
#[case(FieldValue::from("John123"), Some("Invalid user name"))]
#[case(FieldValue::from(""), Some("No name was provided"))]
#[case(FieldValue::from(7), Some("Name must be a string"))]
fn test_name(#[case] value: FieldValue, #[case] expected: Option<&str>) {
    assert_eq!(message(validate_name(value)), expected.map(str::to_string));
}

#[rstest]
#[case(FieldValue::from(5), None)]
#[case(FieldValue::from(0), Some("No measure was provided"))]
#[case(FieldValue::from(-1), Some("Invalid measure"))]
#[case(FieldValue::from("5"), Some("Measure must be a number"))]
fn test_measure(#[case] value: FieldValue, #[case] expected: Option<&str>) {
    assert_eq!(message(validate_measure(value)), expected.map(str::to_string));
}

#[rstest]
#[case(FieldValue::from(70), None)]
#[case(FieldValue::from(501), Some("Invalid weight"))]
#[case(FieldValue::from(0), Some("No weight was provided"))]
#[case(FieldValue::Null, Some("No weight was provided"))]
#[case(FieldValue::from("70"), Some("Weight must be a number"))]
fn test_weight(#[case] value: FieldValue, #[case] expected: Option<&str>) {
    assert_eq!(message(validate_weight(value)), expected.map(str::to_string));
}

#[test]
fn test_validators_are_repeatable() {
    let inputs = [
        ValidationInput::Email("user@example.com".into()),
        ValidationInput::Password("weak".into()),
        ValidationInput::ConfirmPassword {
            password: "a".into(),
            confirm_password: "b".into(),
        },
        ValidationInput::Name("O'Brien".into()),
        ValidationInput::Weight(501.into()),
        ValidationInput::Measure(0.into()),
    ];

    for input in &inputs {
        assert_eq!(input.validate(), input.validate());
    }
}

#[test]
fn test_json_payload_values() {
    let value: FieldValue = serde_json::from_str("\"5\"").unwrap();
    assert_eq!(message(validate_measure(value)), Some("Measure must be a number".to_string()));

    let value: FieldValue = serde_json::from_str("72.5").unwrap();
    assert_eq!(validate_weight(value), Ok(()));
}
