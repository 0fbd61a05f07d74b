//! Repository trait for owners and their pets.

use crate::domain::entities::Owner;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for owners.
///
/// An owner is stored together with its pets; there is no separate pet
/// repository. Saving an owner assigns ids to the owner and to any of its
/// pets that do not have one yet.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryOwnerRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Inserts or replaces an owner and returns the stored copy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the owner carries an id that is
    /// not in the store.
    async fn save(&self, owner: Owner) -> Result<Owner, AppError>;

    /// Finds an owner by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError>;

    /// Lists all owners ordered by id.
    async fn find_all(&self) -> Result<Vec<Owner>, AppError>;

    /// Lists owners whose last name starts with `prefix`, ignoring case.
    async fn find_by_last_name(&self, prefix: &str) -> Result<Vec<Owner>, AppError>;

    /// Finds the owner holding the pet with `pet_id`.
    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Option<Owner>, AppError>;
}
