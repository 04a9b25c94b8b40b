//! Policy lifecycle domain
//!
//! This crate owns the business rules for insurance policies:
//!
//! - **Creation** with holder-identifier uniqueness. The service performs an
//!   advisory existence check, but the authoritative guarantee is the unique
//!   constraint maintained by the store; a constraint violation raised by a
//!   concurrent insert is translated to the same domain error.
//! - **Listing** with optional status and issue-date filters, always ordered
//!   newest issue date first.
//! - **Status transitions** constrained by a fixed, acyclic state machine:
//!   `issued -> active -> void`.
//!
//! Persistence is abstracted behind the [`PolicyStore`] port. The service
//! holds no mutable state and can be shared freely across concurrent callers.

pub mod error;
pub mod filter;
pub mod policy;
pub mod service;
pub mod status;
pub mod store;

pub use error::PolicyError;
pub use filter::{DateRange, PolicyFilter, PolicyQuery};
pub use policy::{NewPolicy, Policy};
pub use service::PolicyService;
pub use status::PolicyStatus;
pub use store::memory::InMemoryPolicyStore;
pub use store::{PolicyStore, StoreError};
