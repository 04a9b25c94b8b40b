//! Policy domain errors
//!
//! All four failure kinds surface to the caller as distinct variants; none
//! are swallowed inside the domain. HTTP status mapping lives in the
//! transport layer.

use core_kernel::PolicyId;
use thiserror::Error;

use crate::status::PolicyStatus;
use crate::store::StoreError;

/// Errors produced by the policy lifecycle service
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A policy already exists for the normalized holder RUT; detected
    /// pre-write or translated from the store's unique constraint
    #[error("A policy already exists for this holder")]
    DuplicateHolder,

    /// No policy has the given identifier
    #[error("Policy {0} not found")]
    NotFound(PolicyId),

    /// The requested status change is not in the allowed-transition table
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: PolicyStatus,
        to: PolicyStatus,
    },

    /// Unclassified persistence failure, propagated unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PolicyError {
    /// True when the caller can retry with different input
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PolicyError::Store(_))
    }
}
