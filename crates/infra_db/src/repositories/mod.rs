//! Repository implementations for the domain persistence ports

pub mod policy;

pub use policy::PgPolicyStore;
