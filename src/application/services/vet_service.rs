//! Veterinarian listing service.

use std::sync::Arc;

use crate::domain::entities::Vet;
use crate::domain::repositories::VetRepository;
use crate::error::AppError;

pub struct VetService<R: VetRepository> {
    repository: Arc<R>,
}

impl<R: VetRepository> VetService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every vet with their specialties.
    pub async fn all_vets(&self) -> Result<Vec<Vet>, AppError> {
        let vets = self.repository.find_all().await?;
        tracing::debug!(count = vets.len(), "vets listed");
        Ok(vets)
    }
}
