//! CapabilityRegistry - the one binding per capability for this process.
//!
//! Built once at startup and handed to the HTTP layer as router state.
//! Cloning shares the same bound instances.

use std::sync::Arc;

use crate::adapters::memory::InMemoryConversationStore;
use crate::adapters::not_configured::{
    NotConfiguredAutoResolution, NotConfiguredClassification, NotConfiguredConversation,
    NotConfiguredResolutionTime, NotConfiguredSimilarity,
};
use crate::adapters::resilience::TimeBounded;
use crate::config::{BackendKind, CapabilitiesConfig, ValidationError};
use crate::domain::foundation::Capability;
use crate::ports::{
    AutoResolutionService, ClassificationService, ConversationService, ResolutionTimeService,
    SimilarityService,
};

/// Resolved capability bindings.
#[derive(Clone)]
pub struct CapabilityRegistry {
    classification: Arc<dyn ClassificationService>,
    resolution_time: Arc<dyn ResolutionTimeService>,
    similarity: Arc<dyn SimilarityService>,
    auto_resolution: Arc<dyn AutoResolutionService>,
    conversation: Arc<dyn ConversationService>,
    bindings: [(Capability, &'static str); 5],
}

impl CapabilityRegistry {
    /// Every capability bound to its "not configured" implementation.
    pub fn not_configured() -> Self {
        CapabilityRegistryBuilder::new().build()
    }

    /// Builder for explicit bindings; unset slots stay "not configured".
    pub fn builder() -> CapabilityRegistryBuilder {
        CapabilityRegistryBuilder::new()
    }

    /// Resolves every capability from configuration.
    ///
    /// Bound (non-stub) backends are wrapped with the capability's timeout.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedBackend` when a backend cannot serve the capability
    /// it is configured for.
    pub fn from_config(config: &CapabilitiesConfig) -> Result<Self, ValidationError> {
        let mut builder = CapabilityRegistryBuilder::new();

        for capability in Capability::ALL {
            let binding = config.binding(capability);
            match (capability, binding.backend) {
                (_, BackendKind::NotConfigured) => {}
                (Capability::Conversation, BackendKind::InMemory) => {
                    let store: Arc<dyn ConversationService> =
                        Arc::new(InMemoryConversationStore::new());
                    builder = builder.conversation_as(
                        Arc::new(TimeBounded::new(store, capability, binding.timeout())),
                        BackendKind::InMemory.as_str(),
                    );
                }
                (_, backend) => {
                    return Err(ValidationError::UnsupportedBackend {
                        capability: capability.key(),
                        backend: backend.as_str(),
                    });
                }
            }
        }

        Ok(builder.build())
    }

    pub fn classification(&self) -> Arc<dyn ClassificationService> {
        Arc::clone(&self.classification)
    }

    pub fn resolution_time(&self) -> Arc<dyn ResolutionTimeService> {
        Arc::clone(&self.resolution_time)
    }

    pub fn similarity(&self) -> Arc<dyn SimilarityService> {
        Arc::clone(&self.similarity)
    }

    pub fn auto_resolution(&self) -> Arc<dyn AutoResolutionService> {
        Arc::clone(&self.auto_resolution)
    }

    pub fn conversation(&self) -> Arc<dyn ConversationService> {
        Arc::clone(&self.conversation)
    }

    /// Backend name bound to each capability, for the startup log.
    pub fn bindings(&self) -> &[(Capability, &'static str)] {
        &self.bindings
    }

    /// Backend name bound to one capability.
    pub fn binding_of(&self, capability: Capability) -> &'static str {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == capability)
            .map(|(_, backend)| *backend)
            .unwrap_or(BackendKind::NotConfigured.as_str())
    }
}

impl std::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("bindings", &self.bindings)
            .finish()
    }
}

/// Assembles a [`CapabilityRegistry`].
pub struct CapabilityRegistryBuilder {
    classification: Arc<dyn ClassificationService>,
    resolution_time: Arc<dyn ResolutionTimeService>,
    similarity: Arc<dyn SimilarityService>,
    auto_resolution: Arc<dyn AutoResolutionService>,
    conversation: Arc<dyn ConversationService>,
    bindings: [(Capability, &'static str); 5],
}

const CUSTOM: &str = "custom";

impl CapabilityRegistryBuilder {
    fn new() -> Self {
        let unbound = BackendKind::NotConfigured.as_str();
        Self {
            classification: Arc::new(NotConfiguredClassification),
            resolution_time: Arc::new(NotConfiguredResolutionTime),
            similarity: Arc::new(NotConfiguredSimilarity),
            auto_resolution: Arc::new(NotConfiguredAutoResolution),
            conversation: Arc::new(NotConfiguredConversation),
            bindings: Capability::ALL.map(|capability| (capability, unbound)),
        }
    }

    fn mark(&mut self, capability: Capability, backend: &'static str) {
        for (bound, name) in self.bindings.iter_mut() {
            if *bound == capability {
                *name = backend;
            }
        }
    }

    pub fn classification(mut self, service: Arc<dyn ClassificationService>) -> Self {
        self.classification = service;
        self.mark(Capability::Classification, CUSTOM);
        self
    }

    pub fn resolution_time(mut self, service: Arc<dyn ResolutionTimeService>) -> Self {
        self.resolution_time = service;
        self.mark(Capability::ResolutionTime, CUSTOM);
        self
    }

    pub fn similarity(mut self, service: Arc<dyn SimilarityService>) -> Self {
        self.similarity = service;
        self.mark(Capability::Similarity, CUSTOM);
        self
    }

    pub fn auto_resolution(mut self, service: Arc<dyn AutoResolutionService>) -> Self {
        self.auto_resolution = service;
        self.mark(Capability::AutoResolution, CUSTOM);
        self
    }

    pub fn conversation(self, service: Arc<dyn ConversationService>) -> Self {
        self.conversation_as(service, CUSTOM)
    }

    fn conversation_as(
        mut self,
        service: Arc<dyn ConversationService>,
        backend: &'static str,
    ) -> Self {
        self.conversation = service;
        self.mark(Capability::Conversation, backend);
        self
    }

    pub fn build(self) -> CapabilityRegistry {
        CapabilityRegistry {
            classification: self.classification,
            resolution_time: self.resolution_time,
            similarity: self.similarity,
            auto_resolution: self.auto_resolution,
            conversation: self.conversation,
            bindings: self.bindings,
        }
    }
}
