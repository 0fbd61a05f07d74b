//! Veterinarian entity.

use serde::Serialize;
use std::fmt;

use super::{Specialty, sorted_by_name};

/// A veterinarian and the specialties they practise.
///
/// Specialties form a set: adding one equal to a specialty already held is
/// a no-op. The count is always the size of that set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    #[serde(serialize_with = "serialize_sorted_specialties")]
    specialties: Vec<Specialty>,
}

impl Vet {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Adds `specialty` unless an equal one is already present.
    pub fn add_specialty(&mut self, specialty: Specialty) {
        if !self.specialties.contains(&specialty) {
            self.specialties.push(specialty);
        }
    }

    /// Specialties sorted by name.
    pub fn specialties(&self) -> Vec<&Specialty> {
        sorted_by_name(&self.specialties, |s| s.name.as_str())
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}

impl fmt::Display for Vet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)?;
        if !self.specialties.is_empty() {
            let names: Vec<&str> = self
                .specialties()
                .into_iter()
                .map(|s| s.name.as_str())
                .collect();
            write!(f, " ({})", names.join(", "))?;
        }
        Ok(())
    }
}

fn serialize_sorted_specialties<S>(
    specialties: &[Specialty],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(sorted_by_name(specialties, |s| s.name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_specialties() {
        let mut vet = Vet::default();
        vet.add_specialty(Specialty::new(None, "surgery"));
        vet.add_specialty(Specialty::new(None, "dentistry"));

        let specialties = vet.specialties();
        assert_eq!(specialties.len(), 2);
        assert!(specialties.iter().any(|s| s.name == "surgery"));
        assert!(specialties.iter().any(|s| s.name == "dentistry"));
    }

    #[test]
    fn test_specialties_sorted_by_name() {
        let mut vet = Vet::default();
        vet.add_specialty(Specialty::new(Some(2), "surgery"));
        vet.add_specialty(Specialty::new(Some(3), "dentistry"));
        vet.add_specialty(Specialty::new(Some(1), "radiology"));

        let names: Vec<&str> = vet
            .specialties()
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["dentistry", "radiology", "surgery"]);
    }

    #[test]
    fn test_nr_of_specialties() {
        let mut vet = Vet::default();
        assert_eq!(vet.nr_of_specialties(), 0);

        vet.add_specialty(Specialty::new(None, "radiology"));
        assert_eq!(vet.nr_of_specialties(), 1);
    }

    #[test]
    fn test_duplicate_specialty_ignored() {
        let mut vet = Vet::default();
        vet.add_specialty(Specialty::new(Some(1), "radiology"));
        vet.add_specialty(Specialty::new(Some(1), "radiology"));

        assert_eq!(vet.nr_of_specialties(), 1);
    }

    #[test]
    fn test_setters_and_getters() {
        let mut vet = Vet::new("John", "Doe");
        vet.id = Some(101);

        assert_eq!(vet.id, Some(101));
        assert_eq!(vet.first_name, "John");
        assert_eq!(vet.last_name, "Doe");
    }

    #[test]
    fn test_serialized_specialties_are_sorted() {
        let mut vet = Vet::new("Linda", "Douglas");
        vet.add_specialty(Specialty::new(Some(2), "surgery"));
        vet.add_specialty(Specialty::new(Some(3), "dentistry"));

        let json = serde_json::to_value(&vet).unwrap();
        assert_eq!(json["specialties"][0]["name"], "dentistry");
        assert_eq!(json["specialties"][1]["name"], "surgery");
    }

    #[test]
    fn test_display_lists_specialties() {
        let mut vet = Vet::new("Linda", "Douglas");
        vet.add_specialty(Specialty::new(Some(3), "surgery"));
        vet.add_specialty(Specialty::new(Some(2), "dentistry"));

        assert_eq!(vet.to_string(), "Linda Douglas (dentistry, surgery)");
        assert_eq!(Vet::new("James", "Carter").to_string(), "James Carter");
    }
}
