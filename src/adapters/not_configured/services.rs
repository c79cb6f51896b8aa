//! "Not configured" bindings for every capability.
//!
//! These are the default bindings. Every operation fails with
//! `CapabilityError::Unavailable` carrying "{Capability} service is not yet
//! configured." so clients see a 503 rather than placeholder data.
//!
//! # Usage
//!
//! ```ignore
//! use ticket_intelligence::adapters::not_configured::NotConfiguredClassification;
//!
//! let service: Arc<dyn ClassificationService> = Arc::new(NotConfiguredClassification);
//! ```

use async_trait::async_trait;

use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::{Capability, CapabilityError, HistoryLimit, TopK};
use crate::domain::ticket::{
    AutoResolutionOutcome, ClassificationOutcome, ResolutionTimeOutcome, SimilarTicket, Ticket,
};
use crate::ports::{
    AutoResolutionService, ClassificationService, ConversationService, ResolutionTimeService,
    SimilarityService,
};

/// Classification binding used until a classifier backend is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotConfiguredClassification;

#[async_trait]
impl ClassificationService for NotConfiguredClassification {
    async fn classify(&self, _ticket: &Ticket) -> Result<ClassificationOutcome, CapabilityError> {
        Err(CapabilityError::not_configured(Capability::Classification))
    }
}

/// Resolution-time binding used until a regressor backend is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotConfiguredResolutionTime;

#[async_trait]
impl ResolutionTimeService for NotConfiguredResolutionTime {
    async fn estimate(&self, _ticket: &Ticket) -> Result<ResolutionTimeOutcome, CapabilityError> {
        Err(CapabilityError::not_configured(Capability::ResolutionTime))
    }
}

/// Similarity binding used until a vector index is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotConfiguredSimilarity;

#[async_trait]
impl SimilarityService for NotConfiguredSimilarity {
    async fn find_similar(
        &self,
        _ticket: &Ticket,
        _top_k: TopK,
    ) -> Result<Vec<SimilarTicket>, CapabilityError> {
        Err(CapabilityError::not_configured(Capability::Similarity))
    }
}

/// Auto-resolution binding used until a generation backend is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotConfiguredAutoResolution;

#[async_trait]
impl AutoResolutionService for NotConfiguredAutoResolution {
    async fn generate(&self, _ticket: &Ticket) -> Result<AutoResolutionOutcome, CapabilityError> {
        Err(CapabilityError::not_configured(Capability::AutoResolution))
    }
}

/// Conversation binding used until a memory store is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotConfiguredConversation;

#[async_trait]
impl ConversationService for NotConfiguredConversation {
    async fn append_turn(&self, _turn: ConversationTurn) -> Result<(), CapabilityError> {
        Err(CapabilityError::not_configured(Capability::Conversation))
    }

    async fn get_history(
        &self,
        _ticket_id: &str,
        _limit: HistoryLimit,
    ) -> Result<Vec<ConversationTurn>, CapabilityError> {
        Err(CapabilityError::not_configured(Capability::Conversation))
    }
}
