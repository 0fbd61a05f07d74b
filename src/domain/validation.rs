//! Field validation hooks applied by entity setters.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Digits-only telephone pattern; length is checked separately per policy.
static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Errors raised when a setter rejects a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Telephone '{value}' must be exactly {digits} digits")]
    Telephone { value: String, digits: usize },
}

impl ValidationError {
    /// Name of the rejected field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Telephone { .. } => "telephone",
        }
    }
}

/// Telephone check installed on an [`Owner`](crate::domain::entities::Owner).
///
/// Validation is opt-in: [`TelephonePolicy::Unchecked`] accepts any value,
/// [`TelephonePolicy::Digits`] requires exactly `len` ASCII digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TelephonePolicy {
    #[default]
    Unchecked,
    Digits {
        len: usize,
    },
}

impl TelephonePolicy {
    pub const fn digits(len: usize) -> Self {
        Self::Digits { len }
    }

    /// Checks `value` against the policy.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Telephone`] when the value is rejected.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        match *self {
            TelephonePolicy::Unchecked => Ok(()),
            TelephonePolicy::Digits { len } => {
                if value.len() == len && DIGITS_REGEX.is_match(value) {
                    Ok(())
                } else {
                    Err(ValidationError::Telephone {
                        value: value.to_string(),
                        digits: len,
                    })
                }
            }
        }
    }
}
