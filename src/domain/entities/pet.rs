//! Pet entity and the back-reference it keeps to its owner.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Owner, PetType};

static NEXT_OWNER_KEY: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`Owner`] instance and its clones.
///
/// Unlike the persistence id, the key exists from construction onward, so a
/// pet can point at an owner that has not been saved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerKey(u64);

impl OwnerKey {
    pub(crate) fn next() -> Self {
        Self(NEXT_OWNER_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

/// Non-owning back-reference from a [`Pet`] to the [`Owner`] that holds it.
///
/// Carries the owner identity plus the id and name as of the last time the
/// owner touched its pets. The owner refreshes these whenever its id or name
/// changes. Equality compares identity only.
#[derive(Debug, Clone)]
pub struct OwnerRef {
    key: OwnerKey,
    id: Option<i32>,
    first_name: String,
    last_name: String,
}

impl OwnerRef {
    pub(crate) fn of(owner: &Owner) -> Self {
        Self {
            key: owner.key(),
            id: owner.id(),
            first_name: owner.first_name().to_string(),
            last_name: owner.last_name().to_string(),
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "First Last", trimmed when either part is empty.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Whether this reference points at `owner`.
    pub fn refers_to(&self, owner: &Owner) -> bool {
        self.key == owner.key()
    }
}

impl PartialEq for OwnerRef {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for OwnerRef {}

impl Hash for OwnerRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialEq<Owner> for OwnerRef {
    fn eq(&self, other: &Owner) -> bool {
        self.refers_to(other)
    }
}

/// A pet registered at the clinic.
///
/// The owner back-reference is private: it is set by [`Owner::add_pet`] and
/// kept current by the owner afterwards. Equality covers every field,
/// including which owner the pet belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Pet {
    pub id: Option<i32>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetType>,
    #[serde(skip)]
    owner: Option<OwnerRef>,
}

impl Pet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn with_type(mut self, pet_type: PetType) -> Self {
        self.pet_type = Some(pet_type);
        self
    }

    /// The owner this pet was added to, if any.
    pub fn owner(&self) -> Option<&OwnerRef> {
        self.owner.as_ref()
    }

    /// True until a persistence collaborator assigns an id.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub(crate) fn link_owner(&mut self, owner: OwnerRef) {
        self.owner = Some(owner);
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pet[id={:?}, name={}", self.id, self.name)?;
        match self.birth_date {
            Some(d) => write!(f, ", birthDate={}", d)?,
            None => write!(f, ", birthDate=None")?,
        }
        match &self.pet_type {
            Some(t) => write!(f, ", type={}", t)?,
            None => write!(f, ", type=None")?,
        }
        match &self.owner {
            Some(o) => write!(
                f,
                ", ownerFirstname={}, ownerLastname={}]",
                o.first_name, o.last_name
            ),
            None => write!(f, ", owner=None]"),
        }
    }
}
