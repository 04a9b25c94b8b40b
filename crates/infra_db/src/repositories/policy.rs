//! PostgreSQL adapter for the policy store port
//!
//! Maps the `policies` table onto the domain entity. The dynamic list query
//! is composed with `QueryBuilder` since status and date filters are both
//! optional; ordering by issue date descending is unconditional.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_kernel::PolicyId;
use rust_decimal::Decimal;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use domain_policy::{Policy, PolicyQuery, PolicyStatus, PolicyStore, StoreError};

use crate::error::DatabaseError;

const SELECT_COLUMNS: &str = "id, holder_rut, issue_date, plan_name, premium, status";

/// Durable [`PolicyStore`] backed by PostgreSQL
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::PgPolicyStore;
///
/// let store = PgPolicyStore::new(pool);
/// let policy = store.find_by_holder("137573970").await?;
/// ```
#[derive(Debug, Clone)]
pub struct PgPolicyStore {
    pool: PgPool,
}

impl PgPolicyStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a policy
#[derive(Debug, Clone, sqlx::FromRow)]
struct PolicyRow {
    id: Uuid,
    holder_rut: String,
    issue_date: DateTime<Utc>,
    plan_name: String,
    premium: Decimal,
    status: String,
}

impl PolicyRow {
    fn into_policy(self) -> Result<Policy, StoreError> {
        let status = PolicyStatus::from_tag(&self.status).ok_or_else(|| {
            StoreError::backend(format!("unknown status tag '{}' in storage", self.status))
        })?;

        Ok(Policy {
            id: PolicyId::from_uuid(self.id),
            holder_rut: self.holder_rut,
            issue_date: self.issue_date,
            plan_name: self.plan_name,
            premium: self.premium,
            status,
        })
    }
}

fn store_err(error: sqlx::Error) -> StoreError {
    StoreError::from(DatabaseError::from(error))
}

#[async_trait]
impl PolicyStore for PgPolicyStore {
    async fn find_by_holder(&self, holder_rut: &str) -> Result<Option<Policy>, StoreError> {
        let row: Option<PolicyRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM policies WHERE holder_rut = $1"
        ))
        .bind(holder_rut)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        row.map(PolicyRow::into_policy).transpose()
    }

    async fn find_by_id(&self, id: PolicyId) -> Result<Option<Policy>, StoreError> {
        let row: Option<PolicyRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM policies WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        row.map(PolicyRow::into_policy).transpose()
    }

    async fn list(&self, query: PolicyQuery) -> Result<Vec<Policy>, StoreError> {
        let mut builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new(format!("SELECT {SELECT_COLUMNS} FROM policies"));

        let mut prefix = " WHERE ";
        if let Some(status) = query.status {
            builder.push(prefix).push("status = ").push_bind(status.as_tag());
            prefix = " AND ";
        }
        if let Some(range) = query.issued {
            builder
                .push(prefix)
                .push("issue_date >= ")
                .push_bind(range.start)
                .push(" AND issue_date < ")
                .push_bind(range.end);
        }
        builder.push(" ORDER BY issue_date DESC");

        let rows: Vec<PolicyRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(store_err)?;

        rows.into_iter().map(PolicyRow::into_policy).collect()
    }

    async fn insert(&self, policy: Policy) -> Result<Policy, StoreError> {
        let row: PolicyRow = sqlx::query_as(&format!(
            "INSERT INTO policies (id, holder_rut, issue_date, plan_name, premium, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(Uuid::from(policy.id))
        .bind(&policy.holder_rut)
        .bind(policy.issue_date)
        .bind(&policy.plan_name)
        .bind(policy.premium)
        .bind(policy.status.as_tag())
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        row.into_policy()
    }

    async fn update(&self, policy: Policy) -> Result<Policy, StoreError> {
        let row: Option<PolicyRow> = sqlx::query_as(&format!(
            "UPDATE policies \
             SET holder_rut = $2, issue_date = $3, plan_name = $4, premium = $5, status = $6 \
             WHERE id = $1 \
             RETURNING {SELECT_COLUMNS}"
        ))
        .bind(Uuid::from(policy.id))
        .bind(&policy.holder_rut)
        .bind(policy.issue_date)
        .bind(&policy.plan_name)
        .bind(policy.premium)
        .bind(policy.status.as_tag())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        row.ok_or_else(|| StoreError::not_found("Policy", policy.id))?
            .into_policy()
    }
}
