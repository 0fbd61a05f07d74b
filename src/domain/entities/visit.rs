//! Visit entity and its builder.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A visit of a pet to the clinic.
///
/// The pet is referenced by id only. [`Visit::new`] stamps the current time;
/// [`VisitBuilder`] does not, so a built visit carries exactly the values it
/// was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: Option<i32>,
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub pet_id: i32,
}

impl Default for Visit {
    fn default() -> Self {
        Self::new()
    }
}

impl Visit {
    pub fn new() -> Self {
        Self {
            id: None,
            date: Some(Utc::now()),
            description: None,
            pet_id: 0,
        }
    }

    pub fn builder() -> VisitBuilder {
        VisitBuilder::default()
    }
}

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "Visit[id={:?}, date={}, description={}, petId={}]",
            self.id,
            date,
            self.description.as_deref().unwrap_or(""),
            self.pet_id
        )
    }
}

/// Fluent builder for [`Visit`].
///
/// Every setter accepts an explicit `None`. No validation is performed and
/// no defaults are applied apart from `pet_id`, which starts at 0.
#[derive(Debug, Clone, Default)]
pub struct VisitBuilder {
    id: Option<i32>,
    date: Option<DateTime<Utc>>,
    description: Option<String>,
    pet_id: i32,
}

impl VisitBuilder {
    pub fn id(mut self, id: impl Into<Option<i32>>) -> Self {
        self.id = id.into();
        self
    }

    pub fn date(mut self, date: impl Into<Option<DateTime<Utc>>>) -> Self {
        self.date = date.into();
        self
    }

    pub fn description(mut self, description: impl Into<Option<String>>) -> Self {
        self.description = description.into();
        self
    }

    pub fn pet_id(mut self, pet_id: i32) -> Self {
        self.pet_id = pet_id;
        self
    }

    pub fn build(self) -> Visit {
        Visit {
            id: self.id,
            date: self.date,
            description: self.description,
            pet_id: self.pet_id,
        }
    }
}
