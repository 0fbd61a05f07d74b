//! Read models returned by the application services.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Pet, PetType, Visit};

/// A pet flattened together with its owner's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDetails {
    pub id: Option<i32>,
    pub name: String,
    pub owner: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetType>,
}

impl From<&Pet> for PetDetails {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id,
            name: pet.name.clone(),
            owner: pet.owner().map(|o| o.full_name()).unwrap_or_default(),
            birth_date: pet.birth_date,
            pet_type: pet.pet_type.clone(),
        }
    }
}

/// Visits of one or more pets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Visits {
    pub items: Vec<Visit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Owner;

    #[test]
    fn test_pet_details_carries_owner_name() {
        let mut owner = Owner::new();
        owner.set_first_name("George");
        owner.set_last_name("Franklin");
        let mut leo = Pet::new("Leo").with_type(PetType::new(Some(1), "cat"));
        leo.id = Some(1);
        owner.add_pet(leo);

        let details = PetDetails::from(owner.pets()[0]);

        assert_eq!(details.id, Some(1));
        assert_eq!(details.owner, "George Franklin");

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["type"]["name"], "cat");
    }

    #[test]
    fn test_unowned_pet_has_empty_owner() {
        let details = PetDetails::from(&Pet::new("Stray"));
        assert_eq!(details.owner, "");
    }
}
