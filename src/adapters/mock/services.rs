//! Mock capability bindings for testing.
//!
//! Each mock returns one configured outcome or error on every call, can
//! simulate latency, and counts calls so tests can assert that validation
//! failures never reach a capability.
//!
//! # Example
//!
//! ```ignore
//! let classifier = MockClassification::new()
//!     .with_outcome(ClassificationOutcome::new(TicketCategory::Billing, 0.9))
//!     .with_delay(Duration::from_millis(50));
//!
//! let outcome = classifier.classify(&ticket).await?;
//! assert_eq!(classifier.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::behavior::Scripted;
use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::{Capability, CapabilityError, HistoryLimit, TopK};
use crate::domain::ticket::{
    AutoResolutionOutcome, ClassificationOutcome, ResolutionTimeOutcome, SimilarTicket, Ticket,
};
use crate::ports::{
    AutoResolutionService, ClassificationService, ConversationService, ResolutionTimeService,
    SimilarityService,
};

/// Mock classifier.
#[derive(Debug, Clone)]
pub struct MockClassification {
    script: Scripted<ClassificationOutcome>,
}

impl Default for MockClassification {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClassification {
    pub fn new() -> Self {
        Self {
            script: Scripted::unconfigured(Capability::Classification),
        }
    }

    pub fn with_outcome(mut self, outcome: ClassificationOutcome) -> Self {
        self.script.set_response(Ok(outcome));
        self
    }

    pub fn with_error(mut self, error: CapabilityError) -> Self {
        self.script.set_response(Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.script.set_delay(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.script.call_count()
    }
}

#[async_trait]
impl ClassificationService for MockClassification {
    async fn classify(&self, _ticket: &Ticket) -> Result<ClassificationOutcome, CapabilityError> {
        self.script.respond().await
    }
}

/// Mock resolution-time regressor.
#[derive(Debug, Clone)]
pub struct MockResolutionTime {
    script: Scripted<ResolutionTimeOutcome>,
}

impl Default for MockResolutionTime {
    fn default() -> Self {
        Self::new()
    }
}

impl MockResolutionTime {
    pub fn new() -> Self {
        Self {
            script: Scripted::unconfigured(Capability::ResolutionTime),
        }
    }

    pub fn with_outcome(mut self, outcome: ResolutionTimeOutcome) -> Self {
        self.script.set_response(Ok(outcome));
        self
    }

    pub fn with_error(mut self, error: CapabilityError) -> Self {
        self.script.set_response(Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.script.set_delay(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.script.call_count()
    }
}

#[async_trait]
impl ResolutionTimeService for MockResolutionTime {
    async fn estimate(&self, _ticket: &Ticket) -> Result<ResolutionTimeOutcome, CapabilityError> {
        self.script.respond().await
    }
}

/// Mock similarity search.
///
/// Returns the configured matches as given, in whatever order they were
/// supplied. Records the most recent `top_k` it was asked for.
#[derive(Debug, Clone)]
pub struct MockSimilarity {
    script: Scripted<Vec<SimilarTicket>>,
    last_top_k: Arc<AtomicUsize>,
}

impl Default for MockSimilarity {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSimilarity {
    pub fn new() -> Self {
        Self {
            script: Scripted::unconfigured(Capability::Similarity),
            last_top_k: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_matches(mut self, matches: Vec<SimilarTicket>) -> Self {
        self.script.set_response(Ok(matches));
        self
    }

    pub fn with_error(mut self, error: CapabilityError) -> Self {
        self.script.set_response(Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.script.set_delay(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.script.call_count()
    }

    /// The `top_k` of the latest call, if any.
    pub fn last_top_k(&self) -> Option<usize> {
        match self.last_top_k.load(Ordering::SeqCst) {
            0 => None,
            k => Some(k),
        }
    }
}

#[async_trait]
impl SimilarityService for MockSimilarity {
    async fn find_similar(
        &self,
        _ticket: &Ticket,
        top_k: TopK,
    ) -> Result<Vec<SimilarTicket>, CapabilityError> {
        self.last_top_k.store(top_k.get(), Ordering::SeqCst);
        self.script.respond().await
    }
}

/// Mock grounded generator.
#[derive(Debug, Clone)]
pub struct MockAutoResolution {
    script: Scripted<AutoResolutionOutcome>,
}

impl Default for MockAutoResolution {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAutoResolution {
    pub fn new() -> Self {
        Self {
            script: Scripted::unconfigured(Capability::AutoResolution),
        }
    }

    pub fn with_outcome(mut self, outcome: AutoResolutionOutcome) -> Self {
        self.script.set_response(Ok(outcome));
        self
    }

    pub fn with_error(mut self, error: CapabilityError) -> Self {
        self.script.set_response(Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.script.set_delay(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.script.call_count()
    }
}

#[async_trait]
impl AutoResolutionService for MockAutoResolution {
    async fn generate(&self, _ticket: &Ticket) -> Result<AutoResolutionOutcome, CapabilityError> {
        self.script.respond().await
    }
}

/// Mock conversation memory.
///
/// `with_history` makes both operations succeed: appends are accepted and
/// discarded, history returns the configured turns as given. `with_error`
/// fails both operations.
#[derive(Debug, Clone)]
pub struct MockConversation {
    script: Scripted<Vec<ConversationTurn>>,
}

impl Default for MockConversation {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConversation {
    pub fn new() -> Self {
        Self {
            script: Scripted::unconfigured(Capability::Conversation),
        }
    }

    pub fn with_history(mut self, turns: Vec<ConversationTurn>) -> Self {
        self.script.set_response(Ok(turns));
        self
    }

    pub fn with_error(mut self, error: CapabilityError) -> Self {
        self.script.set_response(Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.script.set_delay(delay);
        self
    }

    /// Calls across both operations.
    pub fn call_count(&self) -> usize {
        self.script.call_count()
    }
}

#[async_trait]
impl ConversationService for MockConversation {
    async fn append_turn(&self, _turn: ConversationTurn) -> Result<(), CapabilityError> {
        self.script.respond().await.map(|_| ())
    }

    async fn get_history(
        &self,
        _ticket_id: &str,
        limit: HistoryLimit,
    ) -> Result<Vec<ConversationTurn>, CapabilityError> {
        let mut turns = self.script.respond().await?;
        let start = turns.len().saturating_sub(limit.get());
        Ok(turns.split_off(start))
    }
}
