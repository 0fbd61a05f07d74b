//! Pet registration service.

use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::application::requests::PetRequest;
use crate::application::views::PetDetails;
use crate::domain::entities::{Pet, PetType};
use crate::domain::repositories::{OwnerRepository, PetTypeRepository};
use crate::error::AppError;

/// Service for adding, editing and looking up pets.
///
/// Pets are persisted through their owner: each operation loads the owner,
/// changes it through [`Owner`](crate::domain::entities::Owner) methods and
/// saves it back.
pub struct PetService<O: OwnerRepository, T: PetTypeRepository> {
    owner_repository: Arc<O>,
    pet_type_repository: Arc<T>,
}

impl<O: OwnerRepository, T: PetTypeRepository> PetService<O, T> {
    /// Creates a new pet service.
    pub fn new(owner_repository: Arc<O>, pet_type_repository: Arc<T>) -> Self {
        Self {
            owner_repository,
            pet_type_repository,
        }
    }

    /// Lists the known pet types, ordered by name.
    pub async fn pet_types(&self) -> Result<Vec<PetType>, AppError> {
        self.pet_type_repository.find_all().await
    }

    /// Adds a new pet to an owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on invalid input or an unknown pet type.
    /// Returns [`AppError::NotFound`] if the owner does not exist.
    /// Returns [`AppError::Conflict`] if the owner already has a saved pet
    /// with the same name, or if the owner changed since it was read.
    pub async fn create_pet(&self, owner_id: i32, request: PetRequest) -> Result<Pet, AppError> {
        request.validate()?;

        let mut owner = self
            .owner_repository
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Owner not found", json!({ "id": owner_id })))?;

        if owner.pet_matching(&request.name, true).is_some() {
            tracing::warn!(owner_id, name = %request.name, "duplicate pet name");
            return Err(AppError::conflict(
                "Pet already exists",
                json!({ "owner_id": owner_id, "name": request.name }),
            ));
        }

        let pet_type = self.pet_type(request.type_id).await?;
        let mut pet = Pet::new(request.name.clone()).with_type(pet_type);
        pet.birth_date = request.birth_date;
        owner.add_pet(pet);

        let saved = self.owner_repository.save(owner).await?;
        let pet = saved
            .pet_matching(&request.name, true)
            .cloned()
            .ok_or_else(|| {
                AppError::internal("Pet was not stored", json!({ "owner_id": owner_id }))
            })?;

        tracing::info!(owner_id, pet_id = ?pet.id, "pet created");
        Ok(pet)
    }

    /// Updates name, birth date and type of an existing pet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the request has no id, is invalid,
    /// or names an unknown pet type.
    /// Returns [`AppError::NotFound`] if no owner holds the pet and
    /// [`AppError::Conflict`] if the owner changed since it was read.
    pub async fn update_pet(&self, request: PetRequest) -> Result<Pet, AppError> {
        request.validate()?;

        let pet_id = request
            .id
            .ok_or_else(|| AppError::bad_request("Pet id is required", json!({})))?;

        let mut owner = self
            .owner_repository
            .find_by_pet_id(pet_id)
            .await?
            .ok_or_else(|| AppError::not_found("Pet not found", json!({ "id": pet_id })))?;

        let pet_type = self.pet_type(request.type_id).await?;
        owner.update_pet(pet_id, |pet| {
            pet.name = request.name;
            pet.birth_date = request.birth_date;
            pet.pet_type = Some(pet_type);
        });

        let saved = self.owner_repository.save(owner).await?;
        tracing::info!(pet_id, owner_id = ?saved.id(), "pet updated");

        saved
            .pet_by_id(pet_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Pet not found", json!({ "id": pet_id })))
    }

    /// Retrieves a pet together with its owner's name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no owner holds the pet.
    pub async fn find_pet(&self, pet_id: i32) -> Result<PetDetails, AppError> {
        tracing::debug!(pet_id, "looking up pet");
        let owner = self
            .owner_repository
            .find_by_pet_id(pet_id)
            .await?
            .ok_or_else(|| AppError::not_found("Pet not found", json!({ "id": pet_id })))?;

        owner
            .pet_by_id(pet_id)
            .map(PetDetails::from)
            .ok_or_else(|| AppError::not_found("Pet not found", json!({ "id": pet_id })))
    }

    async fn pet_type(&self, type_id: i32) -> Result<PetType, AppError> {
        self.pet_type_repository
            .find_by_id(type_id)
            .await?
            .ok_or_else(|| {
                AppError::bad_request("Unknown pet type", json!({ "type_id": type_id }))
            })
    }
}
