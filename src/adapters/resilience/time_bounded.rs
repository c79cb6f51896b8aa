//! Time-bounded capability decorator.
//!
//! Wraps any capability binding and fails the call with
//! `CapabilityError::Upstream` once the configured limit elapses. Dropping the
//! outer future drops the inner call with it.
//!
//! # Example
//!
//! ```ignore
//! let store: Arc<dyn ConversationService> = Arc::new(InMemoryConversationStore::new());
//! let bounded = TimeBounded::new(store, Capability::Conversation, Duration::from_secs(30));
//! ```

use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::{Capability, CapabilityError, HistoryLimit, TopK};
use crate::domain::ticket::{
    AutoResolutionOutcome, ClassificationOutcome, ResolutionTimeOutcome, SimilarTicket, Ticket,
};
use crate::ports::{
    AutoResolutionService, ClassificationService, ConversationService, ResolutionTimeService,
    SimilarityService,
};

/// A capability binding with a per-call deadline.
#[derive(Debug)]
pub struct TimeBounded<T: ?Sized> {
    inner: Arc<T>,
    capability: Capability,
    limit: Duration,
}

impl<T: ?Sized> TimeBounded<T> {
    pub fn new(inner: Arc<T>, capability: Capability, limit: Duration) -> Self {
        Self {
            inner,
            capability,
            limit,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    async fn bounded<O, F>(&self, call: F) -> Result<O, CapabilityError>
    where
        F: Future<Output = Result<O, CapabilityError>> + Send,
    {
        match tokio::time::timeout(self.limit, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    capability = self.capability.key(),
                    limit_ms = self.limit.as_millis() as u64,
                    "capability_timed_out"
                );
                Err(CapabilityError::upstream(
                    self.capability.display_name(),
                    format!("timed out after {}ms", self.limit.as_millis()),
                ))
            }
        }
    }
}

#[async_trait]
impl<T: ClassificationService + ?Sized> ClassificationService for TimeBounded<T> {
    async fn classify(&self, ticket: &Ticket) -> Result<ClassificationOutcome, CapabilityError> {
        self.bounded(self.inner.classify(ticket)).await
    }
}

#[async_trait]
impl<T: ResolutionTimeService + ?Sized> ResolutionTimeService for TimeBounded<T> {
    async fn estimate(&self, ticket: &Ticket) -> Result<ResolutionTimeOutcome, CapabilityError> {
        self.bounded(self.inner.estimate(ticket)).await
    }
}

#[async_trait]
impl<T: SimilarityService + ?Sized> SimilarityService for TimeBounded<T> {
    async fn find_similar(
        &self,
        ticket: &Ticket,
        top_k: TopK,
    ) -> Result<Vec<SimilarTicket>, CapabilityError> {
        self.bounded(self.inner.find_similar(ticket, top_k)).await
    }
}

#[async_trait]
impl<T: AutoResolutionService + ?Sized> AutoResolutionService for TimeBounded<T> {
    async fn generate(&self, ticket: &Ticket) -> Result<AutoResolutionOutcome, CapabilityError> {
        self.bounded(self.inner.generate(ticket)).await
    }
}

#[async_trait]
impl<T: ConversationService + ?Sized> ConversationService for TimeBounded<T> {
    async fn append_turn(&self, turn: ConversationTurn) -> Result<(), CapabilityError> {
        self.bounded(self.inner.append_turn(turn)).await
    }

    async fn get_history(
        &self,
        ticket_id: &str,
        limit: HistoryLimit,
    ) -> Result<Vec<ConversationTurn>, CapabilityError> {
        self.bounded(self.inner.get_history(ticket_id, limit)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryConversationStore;
    use crate::adapters::mock::{MockClassification, MockSimilarity};
    use crate::domain::ticket::TicketCategory;

    fn ticket() -> Ticket {
        Ticket::new("Dashboard is slow").unwrap()
    }

    #[tokio::test]
    async fn fast_call_passes_through() {
        let mock = Arc::new(
            MockClassification::new()
                .with_outcome(ClassificationOutcome::new(TicketCategory::Performance, 0.8)),
        );
        let bounded = TimeBounded::new(
            mock.clone() as Arc<dyn ClassificationService>,
            Capability::Classification,
            Duration::from_secs(5),
        );

        let outcome = bounded.classify(&ticket()).await.unwrap();
        assert_eq!(outcome.category(), TicketCategory::Performance);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn inner_error_is_not_rewritten() {
        let mock = Arc::new(MockClassification::new());
        let bounded = TimeBounded::new(mock, Capability::Classification, Duration::from_secs(5));

        let err = bounded.classify(&ticket()).await.unwrap_err();
        assert_eq!(err, CapabilityError::not_configured(Capability::Classification));
    }

    #[tokio::test]
    async fn slow_call_becomes_upstream_timeout() {
        let mock = Arc::new(
            MockSimilarity::new()
                .with_matches(Vec::new())
                .with_delay(Duration::from_millis(500)),
        );
        let bounded = TimeBounded::new(mock, Capability::Similarity, Duration::from_millis(20));

        let err = bounded
            .find_similar(&ticket(), TopK::default())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CapabilityError::upstream("Similarity", "timed out after 20ms")
        );
    }

    #[tokio::test]
    async fn wraps_conversation_store() {
        let store: Arc<dyn ConversationService> = Arc::new(InMemoryConversationStore::new());
        let bounded = TimeBounded::new(store, Capability::Conversation, Duration::from_secs(1));

        bounded
            .append_turn(ConversationTurn::new("T1", "hi").unwrap())
            .await
            .unwrap();
        let history = bounded
            .get_history("T1", HistoryLimit::default())
            .await
            .unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(bounded.limit(), Duration::from_secs(1));
    }
}
