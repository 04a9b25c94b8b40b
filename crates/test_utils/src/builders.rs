//! Test Data Builders
//!
//! Builder for policy creation input with sensible defaults, so tests only
//! specify the fields they assert on.

use chrono::{DateTime, Utc};
use domain_policy::{NewPolicy, PolicyStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::{PolicyFixtures, RutFixtures};

/// Builder for policy creation input
pub struct NewPolicyBuilder {
    holder_rut: String,
    issue_date: DateTime<Utc>,
    plan_name: String,
    premium: Decimal,
    status: PolicyStatus,
}

impl Default for NewPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewPolicyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            holder_rut: RutFixtures::primary(),
            issue_date: PolicyFixtures::default_issue_date(),
            plan_name: "Plan Salud Total".to_string(),
            premium: dec!(45000),
            status: PolicyStatus::Issued,
        }
    }

    /// Sets the holder RUT (raw, pre-normalization)
    pub fn with_holder_rut(mut self, rut: impl Into<String>) -> Self {
        self.holder_rut = rut.into();
        self
    }

    /// Sets the issue timestamp
    pub fn with_issue_date(mut self, date: DateTime<Utc>) -> Self {
        self.issue_date = date;
        self
    }

    /// Sets the plan name
    pub fn with_plan_name(mut self, name: impl Into<String>) -> Self {
        self.plan_name = name.into();
        self
    }

    /// Sets the premium
    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.premium = premium;
        self
    }

    /// Sets the initial status
    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the creation input
    pub fn build(self) -> NewPolicy {
        NewPolicy {
            holder_rut: self.holder_rut,
            issue_date: self.issue_date,
            plan_name: self.plan_name,
            premium: self.premium,
            status: self.status,
        }
    }
}
