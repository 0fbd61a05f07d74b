//! In-memory implementation of the pet type repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::PetType;
use crate::domain::repositories::PetTypeRepository;
use crate::error::AppError;

#[derive(Default)]
pub struct InMemoryPetTypeRepository {
    rows: RwLock<BTreeMap<i32, PetType>>,
}

impl InMemoryPetTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new pet type under the next free id.
    pub async fn insert(&self, name: &str) -> PetType {
        let mut rows = self.rows.write().await;
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let pet_type = PetType::new(Some(id), name);
        rows.insert(id, pet_type.clone());
        pet_type
    }
}

#[async_trait]
impl PetTypeRepository for InMemoryPetTypeRepository {
    async fn find_all(&self) -> Result<Vec<PetType>, AppError> {
        let mut types: Vec<PetType> = self.rows.read().await.values().cloned().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PetType>, AppError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPetTypeRepository::new();
        let dog = repo.insert("dog").await;
        let cat = repo.insert("cat").await;

        assert_eq!(dog.id, Some(1));
        assert_eq!(cat.id, Some(2));
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().name, "dog");
        assert!(repo.find_by_id(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_name() {
        let repo = InMemoryPetTypeRepository::new();
        repo.insert("snake").await;
        repo.insert("bird").await;
        repo.insert("cat").await;

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["bird", "cat", "snake"]);
    }
}
