//! In-memory implementation of the owner repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::{BTreeMap, HashSet};
use tokio::sync::RwLock;

use crate::domain::entities::Owner;
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;

#[derive(Default)]
struct OwnerTable {
    rows: BTreeMap<i32, Owner>,
    last_owner_id: i32,
    last_pet_id: i32,
}

/// Owner store with separate id sequences for owners and pets.
///
/// Every stored owner carries a version. `save` only accepts an owner read
/// at the current version, and only pet ids that owner already holds.
#[derive(Default)]
pub struct InMemoryOwnerRepository {
    table: RwLock<OwnerTable>,
}

impl InMemoryOwnerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn save(&self, mut owner: Owner) -> Result<Owner, AppError> {
        let mut table = self.table.write().await;

        let (version, held_pet_ids) = match owner.id() {
            Some(id) => {
                let stored = table
                    .rows
                    .get(&id)
                    .ok_or_else(|| AppError::not_found("Owner not found", json!({ "id": id })))?;
                if stored.version() != owner.version() {
                    tracing::warn!(
                        owner_id = id,
                        stored = stored.version(),
                        given = owner.version(),
                        "stale owner rejected"
                    );
                    return Err(AppError::conflict(
                        "Owner was modified by another request",
                        json!({ "id": id, "version": stored.version() }),
                    ));
                }
                let held: HashSet<i32> = stored.pets().iter().filter_map(|p| p.id).collect();
                (stored.version(), held)
            }
            None => (0, HashSet::new()),
        };

        let mut seen = HashSet::new();
        for pet_id in owner.pets().iter().filter_map(|p| p.id) {
            if !held_pet_ids.contains(&pet_id) || !seen.insert(pet_id) {
                return Err(AppError::conflict(
                    "Pet id is not held by this owner",
                    json!({ "owner_id": owner.id(), "pet_id": pet_id }),
                ));
            }
        }

        if owner.id().is_none() {
            table.last_owner_id += 1;
            owner.set_id(Some(table.last_owner_id));
        }

        for pet in owner.pets_mut().filter(|p| p.is_new()) {
            table.last_pet_id += 1;
            pet.id = Some(table.last_pet_id);
        }

        owner.set_version(version + 1);
        let id = owner.id().unwrap_or_default();
        table.rows.insert(id, owner.clone());
        tracing::debug!(owner_id = id, version = version + 1, "owner stored");

        Ok(owner)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_last_name(&self, prefix: &str) -> Result<Vec<Owner>, AppError> {
        let prefix = prefix.to_lowercase();
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|o| o.last_name().to_lowercase().starts_with(&prefix))
            .cloned()
            .collect())
    }

    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Option<Owner>, AppError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .find(|o| o.pet_by_id(pet_id).is_some())
            .cloned())
    }
}
