//! Visit recording and history service.

use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::application::requests::{MAX_DESCRIPTION_LEN, VisitRequest};
use crate::application::views::Visits;
use crate::domain::entities::Visit;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// Service for recording visits and reading visit history.
///
/// Visits reference pets by id only; the pet is not looked up here.
pub struct VisitService<R: VisitRepository> {
    repository: Arc<R>,
}

impl<R: VisitRepository> VisitService<R> {
    /// Creates a new visit service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records a visit for `pet_id`. A request without a date is stamped now.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the description is too long.
    pub async fn create_visit(&self, pet_id: i32, request: VisitRequest) -> Result<Visit, AppError> {
        request.validate()?;

        let visit = Visit::builder()
            .date(request.date.unwrap_or_else(Utc::now))
            .description(request.description)
            .pet_id(pet_id)
            .build();

        let saved = self.repository.save(visit).await?;
        tracing::info!(visit_id = ?saved.id, pet_id, "visit created");
        Ok(saved)
    }

    /// Replaces the description of a recorded visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the description is too long and
    /// [`AppError::NotFound`] if the visit does not exist.
    pub async fn update_description(
        &self,
        visit_id: i32,
        description: String,
    ) -> Result<Visit, AppError> {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::bad_request(
                "Description too long",
                json!({ "max": MAX_DESCRIPTION_LEN }),
            ));
        }

        let mut visit = self
            .repository
            .find_by_id(visit_id)
            .await?
            .ok_or_else(|| AppError::not_found("Visit not found", json!({ "id": visit_id })))?;

        visit.description = Some(description);
        let saved = self.repository.save(visit).await?;
        tracing::info!(visit_id, "visit updated");
        Ok(saved)
    }

    /// Visits of one pet, oldest first.
    pub async fn visits_for_pet(&self, pet_id: i32) -> Result<Vec<Visit>, AppError> {
        self.repository.find_by_pet_id(pet_id).await
    }

    /// Visits of several pets at once.
    pub async fn visits_for_pets(&self, pet_ids: &[i32]) -> Result<Visits, AppError> {
        if pet_ids.is_empty() {
            return Ok(Visits::default());
        }
        let items = self.repository.find_by_pet_ids(pet_ids).await?;
        Ok(Visits { items })
    }
}
