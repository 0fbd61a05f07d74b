//! Repository trait for veterinarians.

use crate::domain::entities::Vet;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VetRepository: Send + Sync {
    /// Lists all vets ordered by id, specialties included.
    async fn find_all(&self) -> Result<Vec<Vet>, AppError>;
}
