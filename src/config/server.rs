//! Server configuration

use axum::http::{HeaderName, HeaderValue, Method};
use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment name
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// Name reported in logs
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Tracing filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// CORS allowed origins (comma-separated, `*` for any)
    #[serde(default = "default_wildcard")]
    pub cors_origins: String,

    /// CORS allowed methods (comma-separated)
    #[serde(default = "default_cors_methods")]
    pub cors_methods: String,

    /// CORS allowed headers (comma-separated, `*` for any)
    #[serde(default = "default_wildcard")]
    pub cors_headers: String,
}

/// Application environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "stage")]
    Staging,
    #[serde(alias = "prod")]
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human-readable multi-line output
    Pretty,
}

impl ServerConfig {
    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress(format!("{}:{}", self.host, self.port)))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Get CORS origins as a vector
    pub fn cors_origins_list(&self) -> Vec<String> {
        split_list(&self.cors_origins)
    }

    /// Get CORS methods as a vector
    pub fn cors_methods_list(&self) -> Vec<String> {
        split_list(&self.cors_methods)
    }

    /// Get CORS headers as a vector
    pub fn cors_headers_list(&self) -> Vec<String> {
        split_list(&self.cors_headers)
    }

    /// True when any origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins_list().iter().any(|origin| origin == "*")
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        for origin in self.cors_origins_list() {
            if origin != "*" && HeaderValue::from_str(&origin).is_err() {
                return Err(ValidationError::InvalidCorsOrigin(origin));
            }
        }
        for method in self.cors_methods_list() {
            if Method::from_bytes(method.as_bytes()).is_err() {
                return Err(ValidationError::InvalidCorsMethod(method));
            }
        }
        for header in self.cors_headers_list() {
            if header != "*" && HeaderName::from_bytes(header.as_bytes()).is_err() {
                return Err(ValidationError::InvalidCorsHeader(header));
            }
        }
        if self.is_production() && self.allows_any_origin() {
            return Err(ValidationError::WildcardCorsInProduction);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            service_name: default_service_name(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            cors_origins: default_wildcard(),
            cors_methods: default_cors_methods(),
            cors_headers: default_wildcard(),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_service_name() -> String {
    "AI Ticketing System".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_wildcard() -> String {
    "*".to_string()
}

fn default_cors_methods() -> String {
    "GET,POST,OPTIONS".to_string()
}
