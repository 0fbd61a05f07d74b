//! Owner registration and lookup service.

use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::application::requests::OwnerRequest;
use crate::domain::entities::Owner;
use crate::domain::repositories::OwnerRepository;
use crate::domain::validation::TelephonePolicy;
use crate::error::AppError;

/// Service for registering, finding and editing owners.
///
/// Every owner created or updated here has its telephone checked against
/// the service's [`TelephonePolicy`]. An updated owner takes on that policy,
/// replacing whatever policy the stored copy carried before.
///
/// Updates are read-modify-write; a concurrent change to the same owner
/// makes the save fail with [`AppError::Conflict`].
pub struct OwnerService<R: OwnerRepository> {
    repository: Arc<R>,
    telephone_policy: TelephonePolicy,
}

impl<R: OwnerRepository> OwnerService<R> {
    /// Creates a new owner service.
    pub fn new(repository: Arc<R>, telephone_policy: TelephonePolicy) -> Self {
        Self {
            repository,
            telephone_policy,
        }
    }

    /// Registers a new owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is blank or the telephone
    /// is rejected by the policy.
    pub async fn create_owner(&self, request: OwnerRequest) -> Result<Owner, AppError> {
        request.validate()?;

        let mut owner = Owner::with_policy(self.telephone_policy);
        apply(&mut owner, request)?;

        let saved = self.repository.save(owner).await?;
        tracing::info!(owner_id = ?saved.id(), "owner created");
        Ok(saved)
    }

    /// Retrieves an owner by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owner does not exist.
    pub async fn find_owner(&self, id: i32) -> Result<Owner, AppError> {
        tracing::debug!(owner_id = id, "looking up owner");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Owner not found", json!({ "id": id })))
    }

    /// Lists all owners.
    pub async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        self.repository.find_all().await
    }

    /// Lists owners whose last name starts with `prefix` (case-insensitive).
    pub async fn find_by_last_name(&self, prefix: &str) -> Result<Vec<Owner>, AppError> {
        self.repository.find_by_last_name(prefix.trim()).await
    }

    /// Replaces the fields of an existing owner. Pets are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on invalid input,
    /// [`AppError::NotFound`] if the owner does not exist and
    /// [`AppError::Conflict`] if the owner changed since it was read.
    pub async fn update_owner(&self, id: i32, request: OwnerRequest) -> Result<Owner, AppError> {
        request.validate()?;

        let mut owner = self.find_owner(id).await?;
        owner.set_telephone_policy(self.telephone_policy);
        apply(&mut owner, request).inspect_err(|e| {
            tracing::warn!(owner_id = id, error = %e, "owner update rejected");
        })?;

        let saved = self.repository.save(owner).await?;
        tracing::info!(owner_id = id, "owner updated");
        Ok(saved)
    }
}

fn apply(owner: &mut Owner, request: OwnerRequest) -> Result<(), AppError> {
    owner.set_telephone(request.telephone)?;
    owner.set_first_name(request.first_name);
    owner.set_last_name(request.last_name);
    owner.set_address(request.address);
    owner.set_city(request.city);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Pet;
    use crate::domain::repositories::MockOwnerRepository;

    fn request(telephone: &str) -> OwnerRequest {
        OwnerRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            address: "123 Street".to_string(),
            city: "Metropolis".to_string(),
            telephone: telephone.to_string(),
        }
    }

    fn stored_owner(id: i32) -> Owner {
        let mut owner = Owner::new();
        owner.set_id(Some(id));
        owner.set_first_name("Betty");
        owner.set_last_name("Davis");
        owner.add_pet(Pet::new("Basil"));
        owner
    }

    #[tokio::test]
    async fn test_create_owner_success() {
        let mut mock_repo = MockOwnerRepository::new();
        mock_repo
            .expect_save()
            .withf(|o| o.id().is_none() && o.first_name() == "John")
            .times(1)
            .returning(|mut o| {
                o.set_id(Some(11));
                Ok(o)
            });

        let service = OwnerService::new(Arc::new(mock_repo), TelephonePolicy::digits(10));

        let owner = service.create_owner(request("1234567890")).await.unwrap();

        assert_eq!(owner.id(), Some(11));
        assert_eq!(owner.telephone(), "1234567890");
        assert_eq!(owner.telephone_policy(), TelephonePolicy::digits(10));
    }

    #[tokio::test]
    async fn test_create_owner_invalid_telephone() {
        let mock_repo = MockOwnerRepository::new();
        let service = OwnerService::new(Arc::new(mock_repo), TelephonePolicy::digits(10));

        let result = service.create_owner(request("invalid-phone")).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_owner_unchecked_policy_accepts_any_telephone() {
        let mut mock_repo = MockOwnerRepository::new();
        mock_repo.expect_save().times(1).returning(Ok);

        let service = OwnerService::new(Arc::new(mock_repo), TelephonePolicy::Unchecked);

        assert!(service.create_owner(request("+1 (608) 555")).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_owner_blank_name() {
        let mock_repo = MockOwnerRepository::new();
        let service = OwnerService::new(Arc::new(mock_repo), TelephonePolicy::Unchecked);

        let mut req = request("1234567890");
        req.last_name = " ".to_string();

        let result = service.create_owner(req).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_find_owner_not_found() {
        let mut mock_repo = MockOwnerRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = OwnerService::new(Arc::new(mock_repo), TelephonePolicy::Unchecked);

        let result = service.find_owner(99).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_owner_keeps_pets() {
        let mut mock_repo = MockOwnerRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|id| Ok(Some(stored_owner(id))));
        mock_repo.expect_save().times(1).returning(Ok);

        let service = OwnerService::new(Arc::new(mock_repo), TelephonePolicy::digits(10));

        let owner = service.update_owner(2, request("6085551749")).await.unwrap();

        assert_eq!(owner.first_name(), "John");
        assert_eq!(owner.pets().len(), 1);
        assert_eq!(owner.pets()[0].owner().unwrap().first_name(), "John");
    }

    #[tokio::test]
    async fn test_update_owner_applies_service_policy() {
        let mut mock_repo = MockOwnerRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored_owner(id))));

        let service = OwnerService::new(Arc::new(mock_repo), TelephonePolicy::digits(10));

        let result = service.update_owner(2, request("12")).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_owner_replaces_stored_policy() {
        let mut mock_repo = MockOwnerRepository::new();
        mock_repo.expect_find_by_id().times(1).returning(|id| {
            let mut owner = Owner::with_policy(TelephonePolicy::digits(10));
            owner.set_id(Some(id));
            owner.set_telephone("6085551749").unwrap();
            Ok(Some(owner))
        });
        mock_repo
            .expect_save()
            .withf(|o| o.telephone_policy() == TelephonePolicy::Unchecked)
            .times(1)
            .returning(Ok);

        let service = OwnerService::new(Arc::new(mock_repo), TelephonePolicy::Unchecked);

        let owner = service.update_owner(2, request("+1 608 555")).await.unwrap();
        assert_eq!(owner.telephone(), "+1 608 555");
    }

    #[tokio::test]
    async fn test_find_by_last_name_trims_prefix() {
        let mut mock_repo = MockOwnerRepository::new();
        mock_repo
            .expect_find_by_last_name()
            .withf(|prefix| prefix == "Dav")
            .times(1)
            .returning(|_| Ok(vec![stored_owner(2)]));

        let service = OwnerService::new(Arc::new(mock_repo), TelephonePolicy::Unchecked);

        let owners = service.find_by_last_name("  Dav ").await.unwrap();
        assert_eq!(owners.len(), 1);
    }
}
