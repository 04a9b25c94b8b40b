//! Property-Based Test Generators
//!
//! Proptest strategies and fake-data helpers that maintain domain
//! invariants.

use core_kernel::rut;
use domain_policy::PolicyStatus;
use fake::faker::company::en::CompanyName;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for valid formatted RUTs (`NN.NNN.NNN-K` with a correct check
/// digit)
pub fn formatted_rut_strategy() -> impl Strategy<Value = String> {
    (1_000_000u32..=99_999_999u32).prop_map(rut::format)
}

/// Strategy for lifecycle statuses
pub fn status_strategy() -> impl Strategy<Value = PolicyStatus> {
    prop_oneof![
        Just(PolicyStatus::Issued),
        Just(PolicyStatus::Active),
        Just(PolicyStatus::Void),
    ]
}

/// Strategy for non-negative premiums with two decimal places
pub fn premium_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|minor| Decimal::new(minor, 2))
}

/// Random plan label for tests that only need a non-empty name
pub fn random_plan_name() -> String {
    format!("Plan {}", CompanyName().fake::<String>())
}
