//! Service-level tests against the in-memory store
//!
//! Covers creation with holder uniqueness (advisory check and constraint
//! translation), filtered listing with ordering, single lookup, and the
//! full status-transition matrix.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use core_kernel::PolicyId;
use domain_policy::{
    InMemoryPolicyStore, NewPolicy, Policy, PolicyError, PolicyFilter, PolicyQuery, PolicyService,
    PolicyStatus, PolicyStore, StoreError,
};
use rust_decimal_macros::dec;

fn new_policy(holder_rut: &str) -> NewPolicy {
    NewPolicy {
        holder_rut: holder_rut.to_string(),
        issue_date: Utc.with_ymd_and_hms(2025, 10, 22, 10, 0, 0).unwrap(),
        plan_name: "Plan Oro".to_string(),
        premium: dec!(19999.90),
        status: PolicyStatus::Issued,
    }
}

fn new_policy_on(holder_rut: &str, y: i32, m: u32, d: u32) -> NewPolicy {
    NewPolicy {
        issue_date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
        ..new_policy(holder_rut)
    }
}

fn service() -> PolicyService {
    PolicyService::new(Arc::new(InMemoryPolicyStore::new()))
}

mod creation {
    use super::*;

    #[tokio::test]
    async fn create_stores_normalized_holder_rut() {
        let service = service();

        let policy = service.create(new_policy("13.757.397-0")).await.unwrap();

        assert_eq!(policy.holder_rut, "137573970");
        assert_eq!(policy.status, PolicyStatus::Issued);
        assert_eq!(policy.premium, dec!(19999.90));
    }

    #[tokio::test]
    async fn create_uppercases_check_character() {
        let service = service();
        let policy = service.create(new_policy("9.876.543-k")).await.unwrap();
        assert_eq!(policy.holder_rut, "9876543K");
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let service = service();
        let a = service.create(new_policy("11.111.111-1")).await.unwrap();
        let b = service.create(new_policy("22.222.222-2")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn duplicate_holder_is_rejected_without_a_write() {
        let store = Arc::new(InMemoryPolicyStore::new());
        let service = PolicyService::new(store.clone());

        service.create(new_policy("13.757.397-0")).await.unwrap();

        // Same holder in a different rendering collides after normalization
        let result = service.create(new_policy("13757397-0")).await;
        assert!(matches!(result, Err(PolicyError::DuplicateHolder)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn repeated_duplicate_creates_never_mutate_state() {
        let store = Arc::new(InMemoryPolicyStore::new());
        let service = PolicyService::new(store.clone());

        service.create(new_policy("13.757.397-0")).await.unwrap();

        for _ in 0..5 {
            let result = service.create(new_policy("13.757.397-0")).await;
            assert!(matches!(result, Err(PolicyError::DuplicateHolder)));
        }
        assert_eq!(store.len().await, 1);
    }
}

mod listing {
    use super::*;

    async fn seeded_service() -> PolicyService {
        let service = service();
        service
            .create(new_policy_on("11.111.111-1", 2025, 10, 21))
            .await
            .unwrap();
        service
            .create(new_policy_on("22.222.222-2", 2025, 10, 23))
            .await
            .unwrap();
        service
            .create(new_policy_on("33.333.333-3", 2025, 10, 22))
            .await
            .unwrap();
        service
    }

    fn dates(policies: &[Policy]) -> Vec<u32> {
        use chrono::Datelike;
        policies.iter().map(|p| p.issue_date.day()).collect()
    }

    #[tokio::test]
    async fn unfiltered_list_returns_all_newest_first() {
        let service = seeded_service().await;

        let policies = service.find_all(PolicyFilter::default()).await.unwrap();

        assert_eq!(policies.len(), 3);
        assert_eq!(dates(&policies), vec![23, 22, 21]);
    }

    #[tokio::test]
    async fn status_filter_matches_only_that_status() {
        let service = seeded_service().await;
        let first = service.find_all(PolicyFilter::default()).await.unwrap()[0].clone();
        service
            .update_status(first.id, PolicyStatus::Active)
            .await
            .unwrap();

        let active = service
            .find_all(PolicyFilter::by_status("active"))
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, first.id);

        let issued = service
            .find_all(PolicyFilter::by_status("ISSUED"))
            .await
            .unwrap();
        assert_eq!(issued.len(), 2);
    }

    #[tokio::test]
    async fn unrecognized_status_behaves_like_no_filter() {
        let service = seeded_service().await;

        let all = service.find_all(PolicyFilter::default()).await.unwrap();
        let lenient = service
            .find_all(PolicyFilter::by_status("not-a-status"))
            .await
            .unwrap();

        assert_eq!(all.len(), lenient.len());
    }

    #[tokio::test]
    async fn date_range_is_inclusive_of_both_days() {
        let service = seeded_service().await;

        let filter = PolicyFilter::issued_between(
            NaiveDate::from_ymd_opt(2025, 10, 21).unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 22).unwrap(),
        );
        let policies = service.find_all(filter).await.unwrap();

        assert_eq!(dates(&policies), vec![22, 21]);
    }

    #[tokio::test]
    async fn inverted_date_range_is_swapped() {
        let service = seeded_service().await;

        let forward = PolicyFilter::issued_between(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        );
        let backward = PolicyFilter::issued_between(
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );

        let a = service.find_all(forward).await.unwrap();
        let b = service.find_all(backward).await.unwrap();

        assert_eq!(a.len(), 3);
        assert_eq!(dates(&a), dates(&b));
    }

    #[tokio::test]
    async fn lone_bound_applies_no_date_filter() {
        let service = seeded_service().await;

        let filter = PolicyFilter {
            from: Some(NaiveDate::from_ymd_opt(2025, 10, 23).unwrap()),
            ..Default::default()
        };
        let policies = service.find_all(filter).await.unwrap();
        assert_eq!(policies.len(), 3);
    }

    #[tokio::test]
    async fn combined_filters_are_independent() {
        let service = seeded_service().await;

        let filter = PolicyFilter {
            status: Some("issued".to_string()),
            from: Some(NaiveDate::from_ymd_opt(2025, 10, 22).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2025, 10, 23).unwrap()),
        };
        let policies = service.find_all(filter).await.unwrap();
        assert_eq!(dates(&policies), vec![23, 22]);
    }
}

mod lookup {
    use super::*;

    #[tokio::test]
    async fn find_one_returns_the_policy() {
        let service = service();
        let created = service.create(new_policy("13.757.397-0")).await.unwrap();

        let fetched = service.find_one(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn find_one_unknown_id_is_not_found() {
        let service = service();
        let result = service.find_one(PolicyId::new_v7()).await;
        assert!(matches!(result, Err(PolicyError::NotFound(_))));
    }
}

mod transitions {
    use super::*;

    async fn created(service: &PolicyService) -> Policy {
        service.create(new_policy("13.757.397-0")).await.unwrap()
    }

    #[tokio::test]
    async fn issued_activates() {
        let service = service();
        let policy = created(&service).await;

        let updated = service
            .update_status(policy.id, PolicyStatus::Active)
            .await
            .unwrap();

        assert_eq!(updated.status, PolicyStatus::Active);
        let fetched = service.find_one(policy.id).await.unwrap();
        assert_eq!(fetched.status, PolicyStatus::Active);
    }

    #[tokio::test]
    async fn active_voids() {
        let service = service();
        let policy = created(&service).await;
        service
            .update_status(policy.id, PolicyStatus::Active)
            .await
            .unwrap();

        let updated = service
            .update_status(policy.id, PolicyStatus::Void)
            .await
            .unwrap();
        assert_eq!(updated.status, PolicyStatus::Void);
    }

    #[tokio::test]
    async fn issued_cannot_void_directly() {
        let service = service();
        let policy = created(&service).await;

        let result = service.update_status(policy.id, PolicyStatus::Void).await;
        assert!(matches!(
            result,
            Err(PolicyError::InvalidTransition {
                from: PolicyStatus::Issued,
                to: PolicyStatus::Void,
            })
        ));

        let fetched = service.find_one(policy.id).await.unwrap();
        assert_eq!(fetched.status, PolicyStatus::Issued);
    }

    #[tokio::test]
    async fn nothing_leaves_void() {
        let service = service();
        let policy = created(&service).await;
        service
            .update_status(policy.id, PolicyStatus::Active)
            .await
            .unwrap();
        service
            .update_status(policy.id, PolicyStatus::Void)
            .await
            .unwrap();

        for target in [PolicyStatus::Issued, PolicyStatus::Active, PolicyStatus::Void] {
            let result = service.update_status(policy.id, target).await;
            assert!(matches!(result, Err(PolicyError::InvalidTransition { .. })));
        }

        let fetched = service.find_one(policy.id).await.unwrap();
        assert_eq!(fetched.status, PolicyStatus::Void);
    }

    #[tokio::test]
    async fn self_transition_fails() {
        let service = service();
        let policy = created(&service).await;

        let result = service.update_status(policy.id, PolicyStatus::Issued).await;
        assert!(matches!(result, Err(PolicyError::InvalidTransition { .. })));
    }

    #[tokio::test]
    async fn unknown_id_fails_before_transition_check() {
        let service = service();

        // Even a target that is never legal reports NotFound, not
        // InvalidTransition
        let result = service
            .update_status(PolicyId::new_v7(), PolicyStatus::Issued)
            .await;
        assert!(matches!(result, Err(PolicyError::NotFound(_))));
    }

    #[tokio::test]
    async fn repeated_invalid_transition_never_mutates() {
        let service = service();
        let policy = created(&service).await;

        for _ in 0..5 {
            let result = service.update_status(policy.id, PolicyStatus::Void).await;
            assert!(matches!(result, Err(PolicyError::InvalidTransition { .. })));
        }

        let fetched = service.find_one(policy.id).await.unwrap();
        assert_eq!(fetched.status, PolicyStatus::Issued);
    }
}

mod store_failures {
    use super::*;

    /// Store whose advisory lookup sees nothing but whose insert reports a
    /// unique violation, reproducing a create race lost to a concurrent
    /// writer.
    struct LostRaceStore;

    #[async_trait]
    impl PolicyStore for LostRaceStore {
        async fn find_by_holder(&self, _holder_rut: &str) -> Result<Option<Policy>, StoreError> {
            Ok(None)
        }

        async fn find_by_id(&self, _id: PolicyId) -> Result<Option<Policy>, StoreError> {
            Ok(None)
        }

        async fn list(&self, _query: PolicyQuery) -> Result<Vec<Policy>, StoreError> {
            Ok(vec![])
        }

        async fn insert(&self, _policy: Policy) -> Result<Policy, StoreError> {
            Err(StoreError::unique_violation("policies_holder_rut_key"))
        }

        async fn update(&self, policy: Policy) -> Result<Policy, StoreError> {
            Ok(policy)
        }
    }

    /// Store that fails every operation with an opaque backend error
    struct BrokenStore;

    #[async_trait]
    impl PolicyStore for BrokenStore {
        async fn find_by_holder(&self, _holder_rut: &str) -> Result<Option<Policy>, StoreError> {
            Err(StoreError::backend("connection reset"))
        }

        async fn find_by_id(&self, _id: PolicyId) -> Result<Option<Policy>, StoreError> {
            Err(StoreError::backend("connection reset"))
        }

        async fn list(&self, _query: PolicyQuery) -> Result<Vec<Policy>, StoreError> {
            Err(StoreError::backend("connection reset"))
        }

        async fn insert(&self, _policy: Policy) -> Result<Policy, StoreError> {
            Err(StoreError::backend("connection reset"))
        }

        async fn update(&self, _policy: Policy) -> Result<Policy, StoreError> {
            Err(StoreError::backend("connection reset"))
        }
    }

    #[tokio::test]
    async fn lost_create_race_translates_to_duplicate_holder() {
        let service = PolicyService::new(Arc::new(LostRaceStore));

        let result = service.create(new_policy("13.757.397-0")).await;
        assert!(matches!(result, Err(PolicyError::DuplicateHolder)));
    }

    #[tokio::test]
    async fn backend_failures_propagate_unchanged() {
        let service = PolicyService::new(Arc::new(BrokenStore));

        let create = service.create(new_policy("13.757.397-0")).await;
        assert!(matches!(create, Err(PolicyError::Store(_))));

        let list = service.find_all(PolicyFilter::default()).await;
        assert!(matches!(list, Err(PolicyError::Store(_))));
    }
}
