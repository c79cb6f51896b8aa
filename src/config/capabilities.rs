//! Capability binding configuration
//!
//! Selects the backend for each capability and carries the opaque backend
//! settings handed to real backends at wiring time.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::foundation::Capability;

/// Backend kinds that can be bound to a capability
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Every operation fails with "not yet configured"
    #[default]
    NotConfigured,
    /// Process-local store (conversation only)
    InMemory,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::NotConfigured => "not_configured",
            BackendKind::InMemory => "in_memory",
        }
    }

    /// Whether this backend can serve the given capability
    pub fn supports(&self, capability: Capability) -> bool {
        match self {
            BackendKind::NotConfigured => true,
            BackendKind::InMemory => capability == Capability::Conversation,
        }
    }
}

/// Binding for a single capability
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CapabilityBinding {
    #[serde(default)]
    pub backend: BackendKind,

    /// Per-call timeout applied to bound backends
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CapabilityBinding {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CapabilityBinding {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Bindings for all five capabilities
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapabilitiesConfig {
    #[serde(default)]
    pub classification: CapabilityBinding,
    #[serde(default)]
    pub resolution_time: CapabilityBinding,
    #[serde(default)]
    pub similarity: CapabilityBinding,
    #[serde(default)]
    pub auto_resolution: CapabilityBinding,
    #[serde(default)]
    pub conversation: CapabilityBinding,
}

impl CapabilitiesConfig {
    pub fn binding(&self, capability: Capability) -> &CapabilityBinding {
        match capability {
            Capability::Classification => &self.classification,
            Capability::ResolutionTime => &self.resolution_time,
            Capability::Similarity => &self.similarity,
            Capability::AutoResolution => &self.auto_resolution,
            Capability::Conversation => &self.conversation,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for capability in Capability::ALL {
            let binding = self.binding(capability);
            if !(1..=300).contains(&binding.timeout_secs) {
                return Err(ValidationError::InvalidCapabilityTimeout {
                    capability: capability.key(),
                    actual: binding.timeout_secs,
                });
            }
            if !binding.backend.supports(capability) {
                return Err(ValidationError::UnsupportedBackend {
                    capability: capability.key(),
                    backend: binding.backend.as_str(),
                });
            }
        }
        Ok(())
    }
}

/// Opaque settings for external backends.
///
/// Passed through unchanged to whichever backends are wired; nothing here is
/// interpreted by the service boundary.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BackendSettings {
    #[serde(default = "default_aws_region")]
    pub aws_region: String,
    pub classifier_endpoint: Option<String>,
    pub regressor_endpoint: Option<String>,
    pub feature_store_ticket_group: Option<String>,
    pub feature_store_customer_group: Option<String>,
    pub opensearch_host: Option<String>,
    #[serde(default = "default_opensearch_index")]
    pub opensearch_index: String,
    pub bedrock_model_id: Option<String>,
    pub conversation_table: Option<String>,
    pub cdc_stream_name: Option<String>,
}

impl BackendSettings {
    /// Names of the optional settings that carry a value.
    pub fn configured_keys(&self) -> Vec<&'static str> {
        [
            ("classifier_endpoint", &self.classifier_endpoint),
            ("regressor_endpoint", &self.regressor_endpoint),
            ("feature_store_ticket_group", &self.feature_store_ticket_group),
            ("feature_store_customer_group", &self.feature_store_customer_group),
            ("opensearch_host", &self.opensearch_host),
            ("bedrock_model_id", &self.bedrock_model_id),
            ("conversation_table", &self.conversation_table),
            ("cdc_stream_name", &self.cdc_stream_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(key, _)| key)
        .collect()
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            aws_region: default_aws_region(),
            classifier_endpoint: None,
            regressor_endpoint: None,
            feature_store_ticket_group: None,
            feature_store_customer_group: None,
            opensearch_host: None,
            opensearch_index: default_opensearch_index(),
            bedrock_model_id: None,
            conversation_table: None,
            cdc_stream_name: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_aws_region() -> String {
    "us-east-1".to_string()
}

fn default_opensearch_index() -> String {
    "tickets".to_string()
}
