//! Demo dataset: the classic pet clinic owners, pets, vets and visits.
//!
//! Records are inserted in a fixed order, so ids are predictable: owner 1
//! is George Franklin, pet 7 is Samantha, and so on.

use chrono::{NaiveDate, TimeZone, Utc};

use super::InMemoryStore;
use crate::domain::entities::{Owner, Pet, PetType, Specialty, Vet, Visit};
use crate::domain::repositories::{OwnerRepository, VisitRepository};
use crate::error::AppError;

const PET_TYPES: &[&str] = &["cat", "dog", "lizard", "snake", "bird", "hamster"];

const SPECIALTIES: &[&str] = &["radiology", "surgery", "dentistry"];

/// (first name, last name, specialty names)
const VETS: &[(&str, &str, &[&str])] = &[
    ("James", "Carter", &[]),
    ("Helen", "Leary", &["radiology"]),
    ("Linda", "Douglas", &["surgery", "dentistry"]),
    ("Rafael", "Ortega", &["surgery"]),
    ("Henry", "Stevens", &["radiology"]),
    ("Sharon", "Jenkins", &[]),
];

struct SeedOwner {
    first_name: &'static str,
    last_name: &'static str,
    address: &'static str,
    city: &'static str,
    telephone: &'static str,
    /// (name, birth date, pet type name)
    pets: &'static [(&'static str, (i32, u32, u32), &'static str)],
}

const OWNERS: &[SeedOwner] = &[
    SeedOwner {
        first_name: "George",
        last_name: "Franklin",
        address: "110 W. Liberty St.",
        city: "Madison",
        telephone: "6085551023",
        pets: &[("Leo", (2000, 9, 7), "cat")],
    },
    SeedOwner {
        first_name: "Betty",
        last_name: "Davis",
        address: "638 Cardinal Ave.",
        city: "Sun Prairie",
        telephone: "6085551749",
        pets: &[("Basil", (2002, 8, 6), "hamster")],
    },
    SeedOwner {
        first_name: "Eduardo",
        last_name: "Rodriquez",
        address: "2693 Commerce St.",
        city: "McFarland",
        telephone: "6085558763",
        pets: &[("Rosy", (2001, 4, 17), "dog"), ("Jewel", (2000, 3, 7), "dog")],
    },
    SeedOwner {
        first_name: "Harold",
        last_name: "Davis",
        address: "563 Friendly St.",
        city: "Windsor",
        telephone: "6085553198",
        pets: &[("Iggy", (2000, 11, 30), "lizard")],
    },
    SeedOwner {
        first_name: "Peter",
        last_name: "McTavish",
        address: "2387 S. Fair Way",
        city: "Madison",
        telephone: "6085552765",
        pets: &[("George", (2000, 1, 20), "snake")],
    },
    SeedOwner {
        first_name: "Jean",
        last_name: "Coleman",
        address: "105 N. Lake St.",
        city: "Monona",
        telephone: "6085552654",
        pets: &[("Samantha", (1995, 9, 4), "cat"), ("Max", (1995, 9, 4), "cat")],
    },
    SeedOwner {
        first_name: "Jeff",
        last_name: "Black",
        address: "1450 Oak Blvd.",
        city: "Monona",
        telephone: "6085555387",
        pets: &[("Lucky", (1999, 8, 6), "bird")],
    },
    SeedOwner {
        first_name: "Maria",
        last_name: "Escobito",
        address: "345 Maple St.",
        city: "Madison",
        telephone: "6085557683",
        pets: &[("Mulligan", (1997, 2, 24), "dog")],
    },
    SeedOwner {
        first_name: "David",
        last_name: "Schroeder",
        address: "2749 Blackhawk Trail",
        city: "Madison",
        telephone: "6085559435",
        pets: &[("Freddy", (2000, 3, 9), "bird")],
    },
    SeedOwner {
        first_name: "Carlos",
        last_name: "Estaban",
        address: "2335 Independence La.",
        city: "Waunakee",
        telephone: "6085555487",
        pets: &[("Lucky", (2000, 6, 24), "dog"), ("Sly", (2002, 6, 8), "cat")],
    },
];

/// (pet id, date, description)
const VISITS: &[(i32, (i32, u32, u32), &str)] = &[
    (7, (2010, 3, 4), "rabies shot"),
    (8, (2011, 3, 4), "rabies shot"),
    (8, (2009, 6, 4), "neutered"),
    (7, (2008, 9, 4), "spayed"),
];

/// Loads the dataset into `store`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if a seed owner is rejected and
/// [`AppError::Internal`] if the dataset references an unknown pet type.
pub async fn load(store: &InMemoryStore) -> Result<(), AppError> {
    let mut types: Vec<PetType> = Vec::with_capacity(PET_TYPES.len());
    for name in PET_TYPES {
        types.push(store.pet_types.insert(name).await);
    }

    for (first, last, specialties) in VETS {
        let mut vet = Vet::new(*first, *last);
        for name in *specialties {
            vet.add_specialty(specialty(name)?);
        }
        store.vets.insert(vet).await;
    }

    for seed in OWNERS {
        let mut owner = Owner::new();
        owner.set_first_name(seed.first_name);
        owner.set_last_name(seed.last_name);
        owner.set_address(seed.address);
        owner.set_city(seed.city);
        owner.set_telephone(seed.telephone)?;

        for (name, (y, m, d), type_name) in seed.pets {
            let pet_type = types
                .iter()
                .find(|t| t.name == *type_name)
                .cloned()
                .ok_or_else(|| seed_error("pet type", type_name))?;
            let birth_date =
                NaiveDate::from_ymd_opt(*y, *m, *d).ok_or_else(|| seed_error("date", name))?;
            owner.add_pet(Pet::new(*name).with_birth_date(birth_date).with_type(pet_type));
        }

        store.owners.save(owner).await?;
    }

    for (pet_id, (y, m, d), description) in VISITS {
        let date = Utc
            .with_ymd_and_hms(*y, *m, *d, 0, 0, 0)
            .single()
            .ok_or_else(|| seed_error("date", description))?;
        let visit = Visit::builder()
            .date(date)
            .description(description.to_string())
            .pet_id(*pet_id)
            .build();
        store.visits.save(visit).await?;
    }

    tracing::info!(
        owners = OWNERS.len(),
        vets = VETS.len(),
        visits = VISITS.len(),
        "seed data loaded"
    );

    Ok(())
}

fn specialty(name: &str) -> Result<Specialty, AppError> {
    SPECIALTIES
        .iter()
        .position(|s| *s == name)
        .map(|i| Specialty::new(Some(i as i32 + 1), name))
        .ok_or_else(|| seed_error("specialty", name))
}

fn seed_error(kind: &str, value: &str) -> AppError {
    AppError::internal(
        "Invalid seed data",
        serde_json::json!({ "kind": kind, "value": value }),
    )
}
