//! Data transfer objects

pub mod auth;
pub mod policy;
