//! Property tests for the RUT invariants
//!
//! Exercises the crate with generated input instead of fixed vectors:
//! cleaning is idempotent, generated RUTs always validate, formatting
//! round-trips, and nothing ever panics on arbitrary strings.

use chilean_rut::{
    clean_rut, format_rut, get_valid_rut, get_validation_digit, is_valid_rut, matches_rut_patterns,
    validate_rut,
};
use proptest::prelude::*;

proptest! {
    /// Invariant: every operation is total; arbitrary input never panics.
    #[test]
    fn no_panic_on_arbitrary_input(input in ".*") {
        let _ = matches_rut_patterns(&input);
        let _ = clean_rut(&input);
        let _ = format_rut(&input);
        let _ = is_valid_rut(&input);
        let _ = validate_rut(&input);
        let _ = get_valid_rut(&input);
        let _ = get_validation_digit(&input);
    }

    /// Invariant: cleaning is idempotent.
    #[test]
    fn clean_is_idempotent(input in ".*") {
        let once = clean_rut(&input);
        prop_assert_eq!(clean_rut(&once), once.clone());
    }

    /// Invariant: the validation digit of a non-empty digit body is in 0..=11.
    #[test]
    fn validation_digit_in_range(body in "[0-9]{1,15}") {
        let digit = get_validation_digit(&body).unwrap();
        prop_assert!(digit <= 11);
    }

    /// Invariant: a generated RUT validates in both canonical forms.
    #[test]
    fn generated_ruts_validate(body in "[1-9][0-9]{0,9}") {
        let generated = get_valid_rut(&body).unwrap();
        prop_assert!(validate_rut(&generated.formatted).is_valid);
        prop_assert!(validate_rut(&generated.raw).is_valid);
    }

    /// Invariant: the raw and formatted forms are lossless transforms of
    /// each other.
    #[test]
    fn formatted_and_raw_round_trip(body in "[1-9][0-9]{0,9}") {
        let generated = get_valid_rut(&body).unwrap();
        prop_assert_eq!(clean_rut(&generated.formatted), generated.raw.clone());
        prop_assert_eq!(format_rut(&generated.raw), generated.formatted.clone());
    }

    /// Invariant: a `k` check character validates regardless of case.
    #[test]
    fn check_char_case_insensitive(body in "[1-9][0-9]{0,9}") {
        let generated = get_valid_rut(&body).unwrap();
        prop_assert!(validate_rut(&generated.raw.to_uppercase()).is_valid);
        prop_assert!(validate_rut(&generated.raw.to_lowercase()).is_valid);
    }

    /// Invariant: rejected shapes echo the input verbatim.
    #[test]
    fn rejected_shapes_echo_input(input in "[^0-9kK]*") {
        prop_assume!(!matches_rut_patterns(&input));
        let validation = validate_rut(&input);
        prop_assert!(!validation.is_valid);
        prop_assert_eq!(validation.formatted, input);
    }
}
