//! Shared Test Utilities
//!
//! Builders, fixtures, and property-test generators used across the
//! workspace test suites.

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::NewPolicyBuilder;
pub use fixtures::{PolicyFixtures, RutFixtures};
