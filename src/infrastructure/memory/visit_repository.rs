//! In-memory implementation of the visit repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::Visit;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

#[derive(Default)]
struct VisitTable {
    rows: BTreeMap<i32, Visit>,
    last_id: i32,
}

#[derive(Default)]
pub struct InMemoryVisitRepository {
    table: RwLock<VisitTable>,
}

impl InMemoryVisitRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn save(&self, mut visit: Visit) -> Result<Visit, AppError> {
        let mut table = self.table.write().await;

        let id = match visit.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(id) => {
                return Err(AppError::not_found("Visit not found", json!({ "id": id })));
            }
            None => {
                table.last_id += 1;
                table.last_id
            }
        };

        visit.id = Some(id);
        table.rows.insert(id, visit.clone());
        tracing::debug!(visit_id = id, pet_id = visit.pet_id, "visit stored");

        Ok(visit)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Visit>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError> {
        self.find_by_pet_ids(&[pet_id]).await
    }

    async fn find_by_pet_ids(&self, pet_ids: &[i32]) -> Result<Vec<Visit>, AppError> {
        let mut visits: Vec<Visit> = self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|v| pet_ids.contains(&v.pet_id))
            .cloned()
            .collect();
        visits.sort_by(|a, b| a.pet_id.cmp(&b.pet_id).then(a.date.cmp(&b.date)));
        Ok(visits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn visit(pet_id: i32, year: i32, description: &str) -> Visit {
        Visit::builder()
            .date(Utc.with_ymd_and_hms(year, 3, 4, 0, 0, 0).unwrap())
            .description(description.to_string())
            .pet_id(pet_id)
            .build()
    }

    #[tokio::test]
    async fn test_save_assigns_id_then_updates() {
        let repo = InMemoryVisitRepository::new();

        let mut saved = repo.save(visit(500, 2020, "Initial check")).await.unwrap();
        assert_eq!(saved.id, Some(1));

        saved.description = Some("Updated description".to_string());
        let saved = repo.save(saved).await.unwrap();

        let found = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.description.as_deref(), Some("Updated description"));
    }

    #[tokio::test]
    async fn test_save_unknown_id_is_not_found() {
        let repo = InMemoryVisitRepository::new();
        let ghost = Visit::builder().id(9).pet_id(1).build();

        assert!(matches!(
            repo.save(ghost).await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_find_by_pet_ids_ordering() {
        let repo = InMemoryVisitRepository::new();
        repo.save(visit(8, 2011, "rabies shot")).await.unwrap();
        repo.save(visit(7, 2010, "rabies shot")).await.unwrap();
        repo.save(visit(8, 2009, "neutered")).await.unwrap();
        repo.save(visit(3, 2012, "checkup")).await.unwrap();

        let visits = repo.find_by_pet_ids(&[7, 8]).await.unwrap();
        let summary: Vec<(i32, &str)> = visits
            .iter()
            .map(|v| (v.pet_id, v.description.as_deref().unwrap()))
            .collect();
        assert_eq!(
            summary,
            vec![(7, "rabies shot"), (8, "neutered"), (8, "rabies shot")]
        );

        assert_eq!(repo.find_by_pet_id(3).await.unwrap().len(), 1);
        assert!(repo.find_by_pet_id(99).await.unwrap().is_empty());
    }
}
