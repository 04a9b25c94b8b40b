//! The Policy entity
//!
//! A flat record: identifier, normalized holder RUT, issue timestamp, plan
//! name, premium, and lifecycle status. `holder_rut`, `issue_date`, and
//! `premium` are never mutated after creation; `status` changes only through
//! the transition rules enforced by the service.

use chrono::{DateTime, Utc};
use core_kernel::PolicyId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::status::PolicyStatus;

/// An insurance policy record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// System-generated identifier, immutable
    pub id: PolicyId,
    /// Normalized holder RUT; unique across all policies
    pub holder_rut: String,
    /// Issue timestamp, immutable
    pub issue_date: DateTime<Utc>,
    /// Plan label
    pub plan_name: String,
    /// Non-negative premium amount, immutable
    pub premium: Decimal,
    /// Current lifecycle state
    pub status: PolicyStatus,
}

/// Input for creating a policy
///
/// Carries the raw, pre-normalization holder RUT; premium non-negativity and
/// the `issued` initial-status convention are enforced at the schema boundary
/// upstream of the domain.
#[derive(Debug, Clone)]
pub struct NewPolicy {
    pub holder_rut: String,
    pub issue_date: DateTime<Utc>,
    pub plan_name: String,
    pub premium: Decimal,
    pub status: PolicyStatus,
}

impl Policy {
    /// Materializes a policy from creation input with a fresh time-ordered
    /// identifier and an already-normalized holder RUT.
    pub(crate) fn from_new(input: NewPolicy, holder_rut: String) -> Self {
        Self {
            id: PolicyId::new_v7(),
            holder_rut,
            issue_date: input.issue_date,
            plan_name: input.plan_name,
            premium: input.premium,
            status: input.status,
        }
    }
}
