//! Test Fixtures
//!
//! Deterministic, well-known values for tests that assert on exact data.

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::rut;
use domain_policy::{NewPolicy, PolicyStatus};
use rust_decimal_macros::dec;

use crate::builders::NewPolicyBuilder;

/// Well-known valid RUTs (check digits verified against the mod-11 rule)
pub struct RutFixtures;

impl RutFixtures {
    /// `13.757.397-0`
    pub fn primary() -> String {
        rut::format(13_757_397)
    }

    /// `12.345.678-5`
    pub fn secondary() -> String {
        rut::format(12_345_678)
    }

    /// `9.876.543-3`
    pub fn tertiary() -> String {
        rut::format(9_876_543)
    }

    /// `11.111.112-K`, exercises the `K` check digit
    pub fn with_k_digit() -> String {
        rut::format(11_111_112)
    }
}

/// Fixed temporal and policy data
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// Noon UTC on the given day; noon keeps day-boundary assertions away
    /// from midnight edge effects unless a test asks for them.
    pub fn issued_at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .map(|dt| dt.and_utc())
            .unwrap_or_else(|| panic!("invalid fixture date {year}-{month:02}-{day:02}"))
    }

    /// Default issue timestamp used by the builder
    pub fn default_issue_date() -> DateTime<Utc> {
        Self::issued_at(2025, 10, 22)
    }

    /// Three policies with distinct holders issued on consecutive days
    /// (Oct 21, 22, 23 of 2025), one per lifecycle status.
    pub fn seeded_trio() -> Vec<NewPolicy> {
        vec![
            NewPolicyBuilder::new()
                .with_holder_rut(RutFixtures::primary())
                .with_issue_date(Self::issued_at(2025, 10, 21))
                .with_plan_name("Plan Salud Total")
                .with_premium(dec!(45000))
                .with_status(PolicyStatus::Issued)
                .build(),
            NewPolicyBuilder::new()
                .with_holder_rut(RutFixtures::secondary())
                .with_issue_date(Self::issued_at(2025, 10, 22))
                .with_plan_name("Plan Vida Plus")
                .with_premium(dec!(78990.50))
                .with_status(PolicyStatus::Active)
                .build(),
            NewPolicyBuilder::new()
                .with_holder_rut(RutFixtures::tertiary())
                .with_issue_date(Self::issued_at(2025, 10, 23))
                .with_plan_name("Plan Hogar Basico")
                .with_premium(dec!(19990))
                .with_status(PolicyStatus::Void)
                .build(),
        ]
    }
}
