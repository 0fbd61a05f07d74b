//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// [`Config::log_level`]. `json` format emits one JSON object per event,
/// anything else uses the compact text layout.
///
/// # Errors
///
/// Returns an error if the log level is not a valid filter directive or a
/// global subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()?;
    }

    Ok(())
}
