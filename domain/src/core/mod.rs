//! Core domain concepts shared across all subdomains.
//!
//! - [`ids`]: user, workspace and chat identifiers
//! - [`model::ModelId`]: a `provider/model` identifier understood by the runtime
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod ids;
pub mod model;
