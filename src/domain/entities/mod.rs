//! Core business entities of the clinic.
//!
//! - [`Owner`] holds its [`Pet`]s and keeps their back-references current
//! - [`PetType`] and [`Specialty`] are leaf value records
//! - [`Vet`] holds a set of [`Specialty`]
//! - [`Visit`] references a pet by id and comes with a [`VisitBuilder`]

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod specialty;
pub mod vet;
pub mod visit;

pub use owner::{Owner, PetsView};
pub use pet::{OwnerRef, Pet};
pub use pet_type::PetType;
pub use specialty::Specialty;
pub use vet::Vet;
pub use visit::{Visit, VisitBuilder};

/// Stable sort of `items` by the name `name` extracts, case-sensitive.
fn sorted_by_name<'a, T>(items: &'a [T], name: impl Fn(&T) -> &str) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| name(*a).cmp(name(*b)));
    sorted
}
