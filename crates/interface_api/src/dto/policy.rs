//! Policy DTOs
//!
//! Request validation happens here so the domain only ever sees well-formed
//! input: RUT shape and check digit, non-empty plan name, non-negative
//! premium. The list query uses the Spanish parameter names of the public
//! API (`estado`, `desde`, `hasta`).

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use core_kernel::{rut, PolicyId};
use domain_policy::{NewPolicy, Policy, PolicyFilter, PolicyStatus};

/// Request body for creating a policy
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePolicyRequest {
    /// Holder RUT, formatted (`13.757.397-0`) or bare (`137573970`)
    #[validate(custom(function = validate_rut))]
    pub holder_rut: String,
    pub issue_date: DateTime<Utc>,
    #[validate(length(min = 1, message = "plan name is required"))]
    pub plan_name: String,
    #[validate(custom(function = validate_premium))]
    pub premium: Decimal,
    /// Initial status; defaults to `issued` when omitted
    #[serde(default = "default_status")]
    pub status: PolicyStatus,
}

fn default_status() -> PolicyStatus {
    PolicyStatus::Issued
}

impl From<CreatePolicyRequest> for NewPolicy {
    fn from(request: CreatePolicyRequest) -> Self {
        NewPolicy {
            holder_rut: request.holder_rut,
            issue_date: request.issue_date,
            plan_name: request.plan_name,
            premium: request.premium,
            status: request.status,
        }
    }
}

/// Accepts a RUT with or without separators; the normalized form must be a
/// numeric body followed by a matching check digit.
fn validate_rut(raw: &str) -> Result<(), ValidationError> {
    let normalized = rut::normalize(raw);
    if normalized.len() < 2 || normalized.len() > 9 {
        return Err(ValidationError::new("rut_format"));
    }

    let (body, verifier) = normalized.split_at(normalized.len() - 1);
    let body: u32 = body
        .parse()
        .map_err(|_| ValidationError::new("rut_format"))?;
    let verifier = verifier
        .chars()
        .next()
        .ok_or_else(|| ValidationError::new("rut_format"))?;

    if rut::check_digit(body) != verifier {
        return Err(ValidationError::new("rut_check_digit"));
    }
    Ok(())
}

fn validate_premium(premium: &Decimal) -> Result<(), ValidationError> {
    if premium.is_sign_negative() {
        return Err(ValidationError::new("premium_negative"));
    }
    Ok(())
}

/// Query parameters for listing policies
#[derive(Debug, Default, Deserialize)]
pub struct ListPoliciesQuery {
    /// Status tag filter; unrecognized values are ignored
    pub estado: Option<String>,
    /// Issue-date lower bound (inclusive day)
    pub desde: Option<NaiveDate>,
    /// Issue-date upper bound (inclusive day)
    pub hasta: Option<NaiveDate>,
}

impl From<ListPoliciesQuery> for PolicyFilter {
    fn from(query: ListPoliciesQuery) -> Self {
        PolicyFilter {
            status: query.estado,
            from: query.desde,
            to: query.hasta,
        }
    }
}

/// Request body for a status transition
#[derive(Debug, Deserialize)]
pub struct UpdatePolicyStatusRequest {
    pub status: PolicyStatus,
}

/// Policy representation returned by the API
#[derive(Debug, Serialize)]
pub struct PolicyResponse {
    pub id: PolicyId,
    pub holder_rut: String,
    pub issue_date: DateTime<Utc>,
    pub plan_name: String,
    pub premium: Decimal,
    pub status: PolicyStatus,
}

impl From<Policy> for PolicyResponse {
    fn from(policy: Policy) -> Self {
        Self {
            id: policy.id,
            holder_rut: policy.holder_rut,
            issue_date: policy.issue_date,
            plan_name: policy.plan_name,
            premium: policy.premium,
            status: policy.status,
        }
    }
}
