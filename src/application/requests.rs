//! Validated input records for the application services.
//!
//! All requests use Serde for deserialization and `validator` for field
//! rules. Services call `validate()` before touching any entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

/// Upper bound on a visit description.
pub const MAX_DESCRIPTION_LEN: usize = 8192;

/// Owner fields for creation and update.
///
/// The telephone format is not checked here; it is enforced by the
/// service's [`TelephonePolicy`](crate::domain::validation::TelephonePolicy).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[validate(custom(function = "not_blank"))]
    pub city: String,
    #[validate(custom(function = "not_blank"))]
    pub telephone: String,
}

/// Pet fields for creation (`id` absent) and update (`id` present).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PetRequest {
    pub id: Option<i32>,
    pub birth_date: Option<NaiveDate>,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub type_id: i32,
}

/// Visit fields. A missing date means "now".
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequest {
    pub date: Option<DateTime<Utc>>,
    #[validate(length(max = 8192))]
    pub description: Option<String>,
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}
