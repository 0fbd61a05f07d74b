//! Owner entity and the pets it holds.
//!
//! An [`Owner`] owns its [`Pet`]s outright; each pet points back through a
//! non-owning [`OwnerRef`]. The owner is the only place that writes that
//! reference, so it stays consistent across id assignment and renames.
//!
//! # Concurrency
//!
//! `Owner` has no internal locking. Callers sharing one instance across
//! tasks must synchronize externally; the services in
//! [`crate::application`] avoid sharing by loading a fresh copy per call.

use serde::Serialize;
use std::fmt;
use std::ops::Deref;

use super::pet::{OwnerKey, OwnerRef, Pet};
use super::sorted_by_name;
use crate::domain::validation::{TelephonePolicy, ValidationError};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(skip)]
    key: OwnerKey,
    #[serde(skip)]
    version: u64,
    id: Option<i32>,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
    #[serde(skip)]
    telephone_policy: TelephonePolicy,
    #[serde(serialize_with = "serialize_sorted_pets")]
    pets: Vec<Pet>,
}

impl Default for Owner {
    fn default() -> Self {
        Self::new()
    }
}

impl Owner {
    /// Creates an owner with no pets and no telephone validation.
    pub fn new() -> Self {
        Self::with_policy(TelephonePolicy::Unchecked)
    }

    /// Creates an owner whose telephone setter enforces `policy`.
    pub fn with_policy(telephone_policy: TelephonePolicy) -> Self {
        Self {
            key: OwnerKey::next(),
            version: 0,
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            telephone: String::new(),
            telephone_policy,
            pets: Vec::new(),
        }
    }

    pub(crate) fn key(&self) -> OwnerKey {
        self.key
    }

    /// Back-reference handle pointing at this owner.
    pub fn reference(&self) -> OwnerRef {
        OwnerRef::of(self)
    }

    /// Revision of the stored copy this owner was read from; 0 until saved.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    /// Assigns the persistence id. Owned pets pick up the new id.
    pub fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
        self.relink_pets();
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
        self.relink_pets();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
        self.relink_pets();
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn telephone(&self) -> &str {
        &self.telephone
    }

    /// Sets the telephone number, checked against the owner's policy.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Telephone`] when the policy rejects the
    /// value. The stored telephone is left unchanged in that case.
    pub fn set_telephone(&mut self, telephone: impl Into<String>) -> Result<(), ValidationError> {
        let telephone = telephone.into();
        self.telephone_policy.check(&telephone)?;
        self.telephone = telephone;
        Ok(())
    }

    pub fn telephone_policy(&self) -> TelephonePolicy {
        self.telephone_policy
    }

    /// Replaces the policy applied by later [`Owner::set_telephone`] calls.
    /// The current value is not re-checked.
    pub(crate) fn set_telephone_policy(&mut self, telephone_policy: TelephonePolicy) {
        self.telephone_policy = telephone_policy;
    }

    /// Adds `pet` to this owner and points its back-reference here.
    pub fn add_pet(&mut self, mut pet: Pet) {
        pet.link_owner(self.reference());
        self.pets.push(pet);
    }

    /// Read-only view of the pets, sorted by name.
    ///
    /// Ordering is case-sensitive; pets with equal names keep the order they
    /// were added in, and an empty name sorts first. The view borrows the
    /// owner, so nothing can be added or removed through it:
    ///
    /// ```compile_fail
    /// use petclinic_model::domain::entities::{Owner, Pet};
    ///
    /// let owner = Owner::new();
    /// owner.pets().push(&Pet::new("Leo"));
    /// ```
    pub fn pets(&self) -> PetsView<'_> {
        PetsView {
            pets: sorted_by_name(&self.pets, |p| p.name.as_str()),
        }
    }

    /// Finds a pet by name, ignoring case.
    pub fn pet(&self, name: &str) -> Option<&Pet> {
        self.pet_matching(name, false)
    }

    /// Finds a pet by name, ignoring case, optionally skipping unsaved pets.
    pub fn pet_matching(&self, name: &str, ignore_new: bool) -> Option<&Pet> {
        let wanted = name.to_lowercase();
        self.pets
            .iter()
            .filter(|p| !(ignore_new && p.is_new()))
            .find(|p| p.name.chars().flat_map(char::to_lowercase).eq(wanted.chars()))
    }

    pub fn pet_by_id(&self, id: i32) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == Some(id))
    }

    /// Edits the pet with `id` in place.
    ///
    /// The back-reference is restored afterwards, whatever the closure did
    /// to the pet. Returns `false` when no such pet belongs to this owner.
    pub fn update_pet(&mut self, id: i32, f: impl FnOnce(&mut Pet)) -> bool {
        let reference = self.reference();
        match self.pets.iter_mut().find(|p| p.id == Some(id)) {
            Some(pet) => {
                f(pet);
                pet.link_owner(reference);
                true
            }
            None => false,
        }
    }

    /// Mutable access for the persistence collaborator assigning pet ids.
    pub(crate) fn pets_mut(&mut self) -> impl Iterator<Item = &mut Pet> {
        self.pets.iter_mut()
    }

    fn relink_pets(&mut self) {
        let reference = self.reference();
        for pet in &mut self.pets {
            pet.link_owner(reference.clone());
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Owner[id={:?}, lastName={}, firstName={}, address={}, city={}, telephone={}]",
            self.id, self.last_name, self.first_name, self.address, self.city, self.telephone
        )
    }
}

fn serialize_sorted_pets<S>(pets: &[Pet], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(sorted_by_name(pets, |p| p.name.as_str()))
}

/// Immutable, name-ordered view over an owner's pets.
#[derive(Debug, Clone)]
pub struct PetsView<'a> {
    pets: Vec<&'a Pet>,
}

impl<'a> Deref for PetsView<'a> {
    type Target = [&'a Pet];

    fn deref(&self) -> &Self::Target {
        &self.pets
    }
}

impl<'a> IntoIterator for PetsView<'a> {
    type Item = &'a Pet;
    type IntoIter = std::vec::IntoIter<&'a Pet>;

    fn into_iter(self) -> Self::IntoIter {
        self.pets.into_iter()
    }
}

impl<'a, 'v> IntoIterator for &'v PetsView<'a> {
    type Item = &'v &'a Pet;
    type IntoIter = std::slice::Iter<'v, &'a Pet>;

    fn into_iter(self) -> Self::IntoIter {
        self.pets.iter()
    }
}
