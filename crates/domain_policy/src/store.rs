//! Policy store port
//!
//! The domain depends on persistence only through the [`PolicyStore`] trait.
//! Adapters decide the engine; the trait requires atomic check-then-insert
//! with a unique constraint on the normalized holder RUT, and read-modify-
//! write semantics for updates. The in-memory adapter in [`memory`] serves
//! tests and embedded use; `infra_db` provides the PostgreSQL adapter.

use async_trait::async_trait;
use core_kernel::PolicyId;
use thiserror::Error;

use crate::filter::PolicyQuery;
use crate::policy::Policy;

/// Errors surfaced by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// A storage-level unique constraint rejected a write
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// The referenced record does not exist
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Any other persistence failure; propagated unchanged, never retried
    #[error("Storage backend error: {message}")]
    Backend { message: String },
}

impl StoreError {
    /// Creates a unique-violation error naming the violated constraint
    pub fn unique_violation(constraint: impl Into<String>) -> Self {
        StoreError::UniqueViolation {
            constraint: constraint.into(),
        }
    }

    /// Creates a not-found error
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates an opaque backend error
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
        }
    }

    /// True when the error is a unique-constraint violation
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StoreError::UniqueViolation { .. })
    }
}

/// Persistence port for policies
///
/// The store owns durable state and the authoritative uniqueness constraint
/// on `holder_rut`; it carries no business logic. All methods are single
/// atomic operations from the service's point of view.
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// Looks up a policy by its normalized holder RUT
    async fn find_by_holder(&self, holder_rut: &str) -> Result<Option<Policy>, StoreError>;

    /// Looks up a policy by identifier
    async fn find_by_id(&self, id: PolicyId) -> Result<Option<Policy>, StoreError>;

    /// Lists policies matching the query, ordered by `issue_date` descending
    async fn list(&self, query: PolicyQuery) -> Result<Vec<Policy>, StoreError>;

    /// Inserts a new policy.
    ///
    /// Fails with [`StoreError::UniqueViolation`] when another policy with
    /// the same holder RUT already exists, including writes that raced past
    /// the service's advisory pre-check.
    async fn insert(&self, policy: Policy) -> Result<Policy, StoreError>;

    /// Replaces an existing policy record
    async fn update(&self, policy: Policy) -> Result<Policy, StoreError>;
}

/// In-memory store adapter
///
/// Mirrors the durable adapter's contract, including the unique holder
/// index, so the full service behavior is testable without a database.
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    struct Inner {
        by_id: HashMap<PolicyId, Policy>,
        holder_index: HashMap<String, PolicyId>,
    }

    /// HashMap-backed [`PolicyStore`] with a unique holder index
    #[derive(Default)]
    pub struct InMemoryPolicyStore {
        inner: RwLock<Inner>,
    }

    impl InMemoryPolicyStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored policies
        pub async fn len(&self) -> usize {
            self.inner.read().await.by_id.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.inner.read().await.by_id.is_empty()
        }
    }

    #[async_trait]
    impl PolicyStore for InMemoryPolicyStore {
        async fn find_by_holder(&self, holder_rut: &str) -> Result<Option<Policy>, StoreError> {
            let inner = self.inner.read().await;
            Ok(inner
                .holder_index
                .get(holder_rut)
                .and_then(|id| inner.by_id.get(id))
                .cloned())
        }

        async fn find_by_id(&self, id: PolicyId) -> Result<Option<Policy>, StoreError> {
            Ok(self.inner.read().await.by_id.get(&id).cloned())
        }

        async fn list(&self, query: PolicyQuery) -> Result<Vec<Policy>, StoreError> {
            let inner = self.inner.read().await;
            let mut results: Vec<Policy> = inner
                .by_id
                .values()
                .filter(|p| query.matches(p))
                .cloned()
                .collect();
            results.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
            Ok(results)
        }

        async fn insert(&self, policy: Policy) -> Result<Policy, StoreError> {
            let mut inner = self.inner.write().await;
            if inner.holder_index.contains_key(&policy.holder_rut) {
                return Err(StoreError::unique_violation("policies_holder_rut_key"));
            }
            inner
                .holder_index
                .insert(policy.holder_rut.clone(), policy.id);
            inner.by_id.insert(policy.id, policy.clone());
            Ok(policy)
        }

        async fn update(&self, policy: Policy) -> Result<Policy, StoreError> {
            let mut inner = self.inner.write().await;
            let existing = inner
                .by_id
                .get(&policy.id)
                .ok_or_else(|| StoreError::not_found("Policy", policy.id))?;

            // holder_rut is immutable after creation; keep the index honest
            // even if a caller hands back a tampered record
            if existing.holder_rut != policy.holder_rut {
                if inner.holder_index.contains_key(&policy.holder_rut) {
                    return Err(StoreError::unique_violation("policies_holder_rut_key"));
                }
                let old_holder = existing.holder_rut.clone();
                inner.holder_index.remove(&old_holder);
                inner
                    .holder_index
                    .insert(policy.holder_rut.clone(), policy.id);
            }

            inner.by_id.insert(policy.id, policy.clone());
            Ok(policy)
        }
    }
}
