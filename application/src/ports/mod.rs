//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod assistant_runtime;
pub mod capability_factory;
pub mod chat_repository;
pub mod license;
