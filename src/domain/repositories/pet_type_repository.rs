//! Repository trait for pet types.

use crate::domain::entities::PetType;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetTypeRepository: Send + Sync {
    /// Lists all pet types ordered by name.
    async fn find_all(&self) -> Result<Vec<PetType>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<PetType>, AppError>;
}
