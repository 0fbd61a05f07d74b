//! Pet type entity (e.g. "cat", "dog").

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Kind of animal a [`Pet`](super::Pet) is.
///
/// Equality and hashing use the identifier only: two persisted types with the
/// same id are the same type whatever their names say. Types that have not
/// been persisted yet (no id) fall back to comparing names.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PetType {
    pub id: Option<i32>,
    pub name: String,
}

impl PetType {
    pub fn new(id: Option<i32>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl PartialEq for PetType {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.name == other.name,
            _ => false,
        }
    }
}

impl Eq for PetType {}

impl Hash for PetType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.id {
            Some(id) => id.hash(state),
            None => self.name.hash(state),
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(t: &PetType) -> u64 {
        let mut h = DefaultHasher::new();
        t.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_pet_type_properties() {
        let t = PetType::new(Some(1), "hamster");
        assert_eq!(t.id, Some(1));
        assert_eq!(t.name, "hamster");
    }

    #[test]
    fn test_equal_ids_ignore_names() {
        let a = PetType::new(Some(1), "");
        let b = PetType::new(Some(1), "X");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_different_ids_not_equal() {
        assert_ne!(PetType::new(Some(1), "dog"), PetType::new(Some(2), "dog"));
    }

    #[test]
    fn test_unsaved_and_saved_not_equal() {
        assert_ne!(PetType::new(None, "dog"), PetType::new(Some(1), "dog"));
    }

    #[test]
    fn test_unsaved_types_compare_names() {
        assert_eq!(PetType::new(None, "dog"), PetType::new(None, "dog"));
        assert_ne!(PetType::new(None, "dog"), PetType::new(None, "cat"));
    }

    #[test]
    fn test_hash_is_stable() {
        let t = PetType::new(Some(1), "hamster");
        let first = hash_of(&t);
        assert_eq!(first, hash_of(&t));
    }

    #[test]
    fn test_display_contains_name() {
        let t = PetType::new(None, "hamster");
        assert!(t.to_string().contains("hamster"));
    }
}
