//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence collaborator's side of the
//! identifier-assignment contract: entities arrive with `id: None`, and
//! `save` hands them back with ids filled in.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`OwnerRepository`] - Owners together with their pets
//! - [`PetTypeRepository`] - Pet type lookup
//! - [`VetRepository`] - Veterinarians and specialties
//! - [`VisitRepository`] - Visit records

pub mod owner_repository;
pub mod pet_type_repository;
pub mod vet_repository;
pub mod visit_repository;

pub use owner_repository::OwnerRepository;
pub use pet_type_repository::PetTypeRepository;
pub use vet_repository::VetRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
#[cfg(test)]
pub use pet_type_repository::MockPetTypeRepository;
#[cfg(test)]
pub use vet_repository::MockVetRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
