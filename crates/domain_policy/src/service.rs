//! The policy lifecycle service
//!
//! Orchestrates the four operations over the [`PolicyStore`] port. The
//! service is stateless; it owns the business rules and nothing else, so a
//! single instance is shared across concurrent callers.

use std::sync::Arc;

use core_kernel::{rut, PolicyId};
use tracing::instrument;

use crate::error::PolicyError;
use crate::filter::PolicyFilter;
use crate::policy::{NewPolicy, Policy};
use crate::status::PolicyStatus;
use crate::store::PolicyStore;

/// Stateless facade over a [`PolicyStore`]
#[derive(Clone)]
pub struct PolicyService {
    store: Arc<dyn PolicyStore>,
}

impl PolicyService {
    pub fn new(store: Arc<dyn PolicyStore>) -> Self {
        Self { store }
    }

    /// Creates a policy, enforcing holder uniqueness.
    ///
    /// The existence check here is advisory: it gives a fast rejection in
    /// the common case, but a concurrent writer may slip past it. The
    /// store's unique constraint is the authoritative guard; its violation
    /// signal is translated into the same [`PolicyError::DuplicateHolder`].
    /// Any other store failure propagates unchanged.
    #[instrument(skip(self, input), fields(plan = %input.plan_name))]
    pub async fn create(&self, input: NewPolicy) -> Result<Policy, PolicyError> {
        let holder_rut = rut::normalize(&input.holder_rut);

        if self.store.find_by_holder(&holder_rut).await?.is_some() {
            return Err(PolicyError::DuplicateHolder);
        }

        let policy = Policy::from_new(input, holder_rut);
        match self.store.insert(policy).await {
            Ok(persisted) => Ok(persisted),
            // Lost race: a concurrent create committed between the check
            // and this insert
            Err(err) if err.is_unique_violation() => Err(PolicyError::DuplicateHolder),
            Err(err) => Err(PolicyError::Store(err)),
        }
    }

    /// Lists policies matching the filter, newest issue date first.
    ///
    /// Never fails for valid optional inputs: unrecognized status values
    /// and partial date ranges simply apply no filter.
    #[instrument(skip(self))]
    pub async fn find_all(&self, filter: PolicyFilter) -> Result<Vec<Policy>, PolicyError> {
        Ok(self.store.list(filter.resolve()).await?)
    }

    /// Fetches a single policy by identifier
    #[instrument(skip(self))]
    pub async fn find_one(&self, id: PolicyId) -> Result<Policy, PolicyError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(PolicyError::NotFound(id))
    }

    /// Moves a policy to `target` if the transition table allows it.
    ///
    /// Lookup precedes the transition check, so an unknown identifier is
    /// always [`PolicyError::NotFound`]. An illegal transition performs no
    /// write at all.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: PolicyId,
        target: PolicyStatus,
    ) -> Result<Policy, PolicyError> {
        let mut policy = self.find_one(id).await?;

        if !policy.status.can_transition_to(target) {
            return Err(PolicyError::InvalidTransition {
                from: policy.status,
                to: target,
            });
        }

        policy.status = target;
        Ok(self.store.update(policy).await?)
    }
}
