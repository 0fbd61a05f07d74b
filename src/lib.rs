//! # Pet Clinic Model
//!
//! Domain model of a veterinary clinic: owners and their pets, pet types,
//! vets with specialties, and visits.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and field validation
//! - **Application Layer** ([`application`]) - Services, request payloads and views
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repositories and demo data
//!
//! ## Features
//!
//! - Owner to pet relationship with automatic back-references
//! - Read-only, name-ordered view of an owner's pets
//! - Opt-in telephone validation
//! - Fluent builder for visits
//!
//! ## Quick Start
//!
//! ```bash
//! # List the demo owners
//! cargo run -- owners
//!
//! # Show one pet as JSON
//! cargo run -- --json pet 7
//! ```
//!
//! ## Configuration
//!
//! Runtime configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub mod config;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{OwnerService, PetService, VetService, VisitService};
    pub use crate::domain::entities::{
        Owner, OwnerRef, Pet, PetType, PetsView, Specialty, Vet, Visit, VisitBuilder,
    };
    pub use crate::domain::validation::TelephonePolicy;
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryStore;
}
