//! In-memory repository implementations.
//!
//! Each repository keeps its rows in a `BTreeMap` behind a `tokio` lock and
//! hands out ids from its own sequence, starting at 1. Reads return clones,
//! so callers never share a live entity with the store.
//!
//! # Repositories
//!
//! - [`InMemoryOwnerRepository`] - Owners with nested pets
//! - [`InMemoryPetTypeRepository`] - Pet types
//! - [`InMemoryVetRepository`] - Vets with specialties
//! - [`InMemoryVisitRepository`] - Visits
//!
//! [`InMemoryStore`] bundles one of each and can load the demo dataset
//! from [`seed`].

pub mod owner_repository;
pub mod pet_type_repository;
pub mod seed;
pub mod vet_repository;
pub mod visit_repository;

pub use owner_repository::InMemoryOwnerRepository;
pub use pet_type_repository::InMemoryPetTypeRepository;
pub use vet_repository::InMemoryVetRepository;
pub use visit_repository::InMemoryVisitRepository;

use std::sync::Arc;

use crate::error::AppError;

/// One instance of every in-memory repository.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub owners: Arc<InMemoryOwnerRepository>,
    pub pet_types: Arc<InMemoryPetTypeRepository>,
    pub vets: Arc<InMemoryVetRepository>,
    pub visits: Arc<InMemoryVisitRepository>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the demo dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if a seed record is rejected; see [`seed::load`].
    pub async fn seeded() -> Result<Self, AppError> {
        let store = Self::new();
        seed::load(&store).await?;
        Ok(store)
    }
}
