//! Domain layer containing business entities and logic.
//!
//! The domain layer has no dependencies on infrastructure or outer layers.
//!
//! # Architecture
//!
//! - [`entities`] - Owners, pets, vets, visits and their value records
//! - [`repositories`] - Data access trait definitions (identifier assignment)
//! - [`validation`] - Field checks applied by entity setters
//!
//! # Design Principles
//!
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Use cases live in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod validation;
