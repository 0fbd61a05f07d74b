//! Infrastructure layer for external integrations.
//!
//! This layer implements the repository interfaces defined by the domain
//! layer.
//!
//! # Modules
//!
//! - [`memory`] - In-memory repository implementations and seed data

pub mod memory;
