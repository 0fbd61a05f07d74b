//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any service
//! is built.
//!
//! ```bash
//! export RUST_LOG="info"
//! export LOG_FORMAT="json"
//! export TELEPHONE_VALIDATION="true"
//! export TELEPHONE_DIGITS="10"
//! export SEED_DATA="true"
//! ```
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TELEPHONE_VALIDATION` - Enforce the telephone format (default: `true`)
//! - `TELEPHONE_DIGITS` - Exact number of digits in a telephone (default: 10, 1-15)
//! - `SEED_DATA` - Load the demo dataset into the in-memory store (default: `true`)

use anyhow::Result;
use std::env;

use crate::domain::validation::TelephonePolicy;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// When false, owners accept any telephone value.
    pub telephone_validation: bool,
    /// Required telephone length when validation is on.
    pub telephone_digits: usize,
    pub seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            telephone_validation: true,
            telephone_digits: 10,
            seed_data: true,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let telephone_validation = env::var("TELEPHONE_VALIDATION")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.telephone_validation);

        let telephone_digits = env::var("TELEPHONE_DIGITS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.telephone_digits);

        let seed_data = env::var("SEED_DATA")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.seed_data);

        Ok(Self {
            log_level,
            log_format,
            telephone_validation,
            telephone_digits,
            seed_data,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `telephone_digits` is outside 1..=15
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // E.164 numbers have at most 15 digits.
        if !(1..=15).contains(&self.telephone_digits) {
            anyhow::bail!(
                "TELEPHONE_DIGITS must be between 1 and 15, got {}",
                self.telephone_digits
            );
        }

        Ok(())
    }

    /// Telephone policy handed to the owner service.
    pub fn telephone_policy(&self) -> TelephonePolicy {
        if self.telephone_validation {
            TelephonePolicy::digits(self.telephone_digits)
        } else {
            TelephonePolicy::Unchecked
        }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        if self.telephone_validation {
            tracing::info!("  Telephone: {} digits", self.telephone_digits);
        } else {
            tracing::info!("  Telephone: unchecked");
        }
        tracing::info!("  Seed data: {}", self.seed_data);
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in the binary).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
