//! Core Kernel - Foundational types for the policy lifecycle system
//!
//! This crate provides the building blocks shared by all other crates:
//! - Strongly-typed identifiers
//! - RUT (holder identifier) normalization and check-digit helpers
//! - Common error types

pub mod error;
pub mod identifiers;
pub mod rut;

pub use error::CoreError;
pub use identifiers::{PolicyId, UserId};
