#![allow(dead_code)]

use chrono::NaiveDate;
use std::sync::Arc;
use petclinic_model::application::requests::{OwnerRequest, PetRequest};
use petclinic_model::application::services::{
    OwnerService, PetService, VetService, VisitService,
};
use petclinic_model::domain::validation::TelephonePolicy;
use petclinic_model::infrastructure::memory::{
    InMemoryOwnerRepository, InMemoryPetTypeRepository, InMemoryStore, InMemoryVetRepository,
    InMemoryVisitRepository,
};

pub struct TestClinic {
    pub store: InMemoryStore,
    pub owners: OwnerService<InMemoryOwnerRepository>,
    pub pets: PetService<InMemoryOwnerRepository, InMemoryPetTypeRepository>,
    pub vets: VetService<InMemoryVetRepository>,
    pub visits: VisitService<InMemoryVisitRepository>,
}

impl TestClinic {
    pub fn new(store: InMemoryStore) -> Self {
        Self {
            owners: OwnerService::new(store.owners.clone(), TelephonePolicy::digits(10)),
            pets: PetService::new(store.owners.clone(), store.pet_types.clone()),
            vets: VetService::new(store.vets.clone()),
            visits: VisitService::new(store.visits.clone()),
            store,
        }
    }
}

pub async fn seeded_clinic() -> TestClinic {
    TestClinic::new(InMemoryStore::seeded().await.unwrap())
}

pub fn empty_clinic() -> TestClinic {
    TestClinic::new(InMemoryStore::new())
}

pub fn owner_request(first_name: &str, last_name: &str) -> OwnerRequest {
    OwnerRequest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: "110 W. Liberty St.".to_string(),
        city: "Madison".to_string(),
        telephone: "6085551023".to_string(),
    }
}

pub fn pet_request(name: &str, type_id: i32) -> PetRequest {
    PetRequest {
        id: None,
        birth_date: NaiveDate::from_ymd_opt(2020, 5, 1),
        name: name.to_string(),
        type_id,
    }
}
