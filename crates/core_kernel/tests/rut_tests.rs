//! Unit and property tests for RUT normalization
//!
//! Normalization must be total, idempotent, and produce the same canonical
//! form for every accepted human-readable rendering of the same identifier.

use core_kernel::rut;
use proptest::prelude::*;

#[test]
fn normalize_canonical_examples() {
    assert_eq!(rut::normalize("13.757.397-0"), "137573970");
    assert_eq!(rut::normalize("13757397-0"), "137573970");
    assert_eq!(rut::normalize("137573970"), "137573970");
}

#[test]
fn normalize_uppercases_k() {
    assert_eq!(rut::normalize("9.876.543-k"), "9876543K");
}

#[test]
fn equivalent_renderings_collapse_to_one_key() {
    let renderings = ["33.333.333-3", "33333333-3", "333333333", "33.333.333-3"];
    let keys: Vec<String> = renderings.iter().map(|r| rut::normalize(r)).collect();
    assert!(keys.iter().all(|k| k == "333333333"));
}

proptest! {
    #[test]
    fn normalize_never_panics(raw in ".*") {
        let _ = rut::normalize(&raw);
    }

    #[test]
    fn normalize_is_idempotent(raw in ".*") {
        let once = rut::normalize(&raw);
        prop_assert_eq!(rut::normalize(&once), once);
    }

    #[test]
    fn normalized_form_has_no_separators(raw in ".*") {
        let canonical = rut::normalize(&raw);
        prop_assert!(!canonical.contains('.'));
        prop_assert!(!canonical.contains('-'));
    }

    #[test]
    fn formatted_ruts_normalize_to_body_plus_check(body in 1_000_000u32..99_999_999u32) {
        let formatted = rut::format(body);
        let expected = std::format!("{}{}", body, rut::check_digit(body));
        prop_assert_eq!(rut::normalize(&formatted), expected);
    }
}
