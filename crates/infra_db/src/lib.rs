//! Infrastructure Database Layer
//!
//! PostgreSQL-backed implementation of the domain's persistence port.
//!
//! The `policies` table carries the authoritative unique constraint on the
//! normalized holder RUT; the adapter translates SQLSTATE 23505 into the
//! store-level unique-violation error the domain service understands.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgPolicyStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/policies")).await?;
//! let store = PgPolicyStore::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::PgPolicyStore;
