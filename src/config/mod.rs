//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TICKET_INTEL` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ticket_intelligence::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod capabilities;
mod error;
mod server;

pub use capabilities::{BackendKind, BackendSettings, CapabilitiesConfig, CapabilityBinding};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// service with all capabilities unbound.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Backend binding per capability
    #[serde(default)]
    pub capabilities: CapabilitiesConfig,

    /// Opaque settings for external backends
    #[serde(default)]
    pub backends: BackendSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TICKET_INTEL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TICKET_INTEL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TICKET_INTEL__CAPABILITIES__CONVERSATION__BACKEND=in_memory`
    ///   -> `capabilities.conversation.backend = in_memory`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TICKET_INTEL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.capabilities.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Capability;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "TICKET_INTEL__SERVER__PORT",
        "TICKET_INTEL__SERVER__ENVIRONMENT",
        "TICKET_INTEL__SERVER__LOG_FORMAT",
        "TICKET_INTEL__CAPABILITIES__CONVERSATION__BACKEND",
        "TICKET_INTEL__CAPABILITIES__RESOLUTION_TIME__TIMEOUT_SECS",
        "TICKET_INTEL__BACKENDS__AWS_REGION",
        "TICKET_INTEL__BACKENDS__OPENSEARCH_HOST",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(
            config.capabilities.binding(Capability::Conversation).backend,
            BackendKind::NotConfigured
        );
        assert_eq!(config.backends.aws_region, "us-east-1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_values_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TICKET_INTEL__SERVER__PORT", "3000");
        env::set_var("TICKET_INTEL__SERVER__LOG_FORMAT", "pretty");
        env::set_var("TICKET_INTEL__CAPABILITIES__CONVERSATION__BACKEND", "in_memory");
        env::set_var("TICKET_INTEL__CAPABILITIES__RESOLUTION_TIME__TIMEOUT_SECS", "12");
        env::set_var("TICKET_INTEL__BACKENDS__AWS_REGION", "eu-west-1");
        env::set_var("TICKET_INTEL__BACKENDS__OPENSEARCH_HOST", "https://search.internal");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Pretty);
        assert_eq!(config.capabilities.conversation.backend, BackendKind::InMemory);
        assert_eq!(config.capabilities.resolution_time.timeout_secs, 12);
        assert_eq!(config.backends.aws_region, "eu-west-1");
        assert_eq!(
            config.backends.opensearch_host.as_deref(),
            Some("https://search.internal")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TICKET_INTEL__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert!(matches!(
            config.validate(),
            Err(ValidationError::WildcardCorsInProduction)
        ));
    }

    #[test]
    fn test_unknown_backend_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TICKET_INTEL__CAPABILITIES__CONVERSATION__BACKEND", "dynamodb");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
