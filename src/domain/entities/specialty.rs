//! Veterinary specialty (e.g. "radiology").

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Specialty {
    pub id: Option<i32>,
    pub name: String,
}

impl Specialty {
    pub fn new(id: Option<i32>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
