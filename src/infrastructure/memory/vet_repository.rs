//! In-memory implementation of the vet repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::Vet;
use crate::domain::repositories::VetRepository;
use crate::error::AppError;

#[derive(Default)]
pub struct InMemoryVetRepository {
    rows: RwLock<BTreeMap<i32, Vet>>,
}

impl InMemoryVetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `vet` under the next free id and returns the stored copy.
    pub async fn insert(&self, mut vet: Vet) -> Vet {
        let mut rows = self.rows.write().await;
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        vet.id = Some(id);
        rows.insert(id, vet.clone());
        vet
    }
}

#[async_trait]
impl VetRepository for InMemoryVetRepository {
    async fn find_all(&self) -> Result<Vec<Vet>, AppError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Specialty;

    #[tokio::test]
    async fn test_insert_assigns_ids_in_order() {
        let repo = InMemoryVetRepository::new();
        let mut leary = Vet::new("Helen", "Leary");
        leary.add_specialty(Specialty::new(Some(1), "radiology"));

        let carter = repo.insert(Vet::new("James", "Carter")).await;
        let leary = repo.insert(leary).await;

        assert_eq!(carter.id, Some(1));
        assert_eq!(leary.id, Some(2));

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].nr_of_specialties(), 1);
    }
}
