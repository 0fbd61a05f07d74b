//! Repository trait for visits.

use crate::domain::entities::Visit;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for visit records.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryVisitRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Inserts a visit without an id, or replaces the stored one with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the visit carries an unknown id.
    async fn save(&self, visit: Visit) -> Result<Visit, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Visit>, AppError>;

    /// Visits of one pet, oldest first.
    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError>;

    /// Visits of several pets, ordered by pet id then date.
    async fn find_by_pet_ids(&self, pet_ids: &[i32]) -> Result<Vec<Visit>, AppError>;
}
