//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over `server.log_level` when set. Output is one JSON object
//! per line by default, or the human-readable format for local work.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServerConfig};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Tracing subscriber could not be installed: {0}")]
    InstallFailed(String),
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Fails when the filter directive does not parse or a global subscriber is
/// already installed.
pub fn init_tracing(server: &ServerConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(std::env::var("RUST_LOG").ok(), &server.log_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match server.log_format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    installed.map_err(|err| TelemetryError::InstallFailed(err.to_string()))
}

/// Builds the level filter from `RUST_LOG` if present, else the configured
/// directive.
fn env_filter(from_env: Option<String>, configured: &str) -> Result<EnvFilter, TelemetryError> {
    let directive = from_env
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| configured.to_string());

    EnvFilter::try_new(&directive).map_err(|err| TelemetryError::InvalidFilter {
        reason: err.to_string(),
        directive,
    })
}
