use fieldcheck::prelude::*;
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = Mode> {
    proptest::sample::select(Mode::ALL.to_vec())
}

/// Printable ASCII plus a few whitespace characters, padded on both sides.
fn padded_input() -> impl Strategy<Value = String> {
    ("[ \t]{0,3}", "[ -~\t]{0,24}", "[ \t\n]{0,3}")
        .prop_map(|(lead, body, trail)| format!("{}{}{}", lead, body, trail))
}

proptest! {
    #[test]
    fn accepted_values_are_idempotent(input in padded_input(), mode in any_mode()) {
        let validator = FieldValidator::new();
        if let ValidationResult::Accepted { value } = validator.validate(&input, mode) {
            prop_assert_eq!(
                validator.validate(&value, mode),
                ValidationResult::accepted(value.clone())
            );
        }
    }

    #[test]
    fn accepted_values_are_trimmed(input in padded_input(), mode in any_mode()) {
        if let Some(value) = FieldValidator::new().validate(&input, mode).value() {
            prop_assert_eq!(value, value.trim());
            prop_assert!(!value.is_empty());
        }
    }

    #[test]
    fn accepted_values_respect_comma_rules(input in "[a-z ,]{1,16}", mode in any_mode()) {
        if let Some(value) = FieldValidator::new().validate(&input, mode).value() {
            prop_assert!(!value.starts_with(','));
            prop_assert!(!value.ends_with(','));
            prop_assert!(!value.contains(",,"));
            prop_assert!(!value.contains(", ,"));
        }
    }

    #[test]
    fn accepted_values_are_never_reserved(input in "[a-z]{4}", mode in any_mode()) {
        if let Some(value) = FieldValidator::new().validate(&input, mode).value() {
            prop_assert_ne!(value, "name");
        }
    }

    #[test]
    fn digits_pass_numeric_friendly_modes(digits in "[0-9]{1,12}") {
        let validator = FieldValidator::new();
        prop_assert!(validator.is_valid(&digits, Mode::Number));
        prop_assert!(validator.is_valid(&digits, Mode::Alphanumeric));
        prop_assert!(validator.is_valid(&digits, Mode::Text));
    }

    #[test]
    fn letters_fail_number_mode(letters in "[a-zA-Z]{1,12}") {
        let result = FieldValidator::new().validate(&letters, Mode::Number);
        prop_assert_eq!(result.rejection(), Some(Rejection::NotNumber));
    }

    #[test]
    fn validation_never_panics(input in ".*", tag in ".{0,12}") {
        let _ = validate_field(&input, &tag);
    }
}
