//! Application layer services implementing the clinic's use cases.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and
//! give outer layers (the CLI, a transport) a single entry point per use case.
//!
//! # Available Services
//!
//! - [`services::OwnerService`] - Owner registration, lookup and updates
//! - [`services::PetService`] - Pets and pet types
//! - [`services::VetService`] - Veterinarian listing
//! - [`services::VisitService`] - Visit recording and history

pub mod requests;
pub mod services;
pub mod views;
