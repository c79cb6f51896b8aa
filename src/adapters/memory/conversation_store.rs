//! In-Memory Conversation Store
//!
//! Keeps conversation threads in process memory. Selected with
//! `capabilities.conversation.backend = in_memory`; also used by tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::{CapabilityError, HistoryLimit};
use crate::ports::ConversationService;

/// Thread storage keyed by ticket id.
///
/// Each thread holds its turns in commit order. `created_at` is stored as
/// given and never used for ordering.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    threads: Arc<RwLock<HashMap<String, Vec<ConversationTurn>>>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of threads with at least one turn.
    pub async fn thread_count(&self) -> usize {
        self.threads.read().await.len()
    }

    /// Total number of stored turns across all threads.
    pub async fn turn_count(&self) -> usize {
        self.threads.read().await.values().map(Vec::len).sum()
    }

    /// Clear all stored threads (useful for tests)
    pub async fn clear(&self) {
        self.threads.write().await.clear();
    }
}

#[async_trait]
impl ConversationService for InMemoryConversationStore {
    async fn append_turn(&self, turn: ConversationTurn) -> Result<(), CapabilityError> {
        let mut threads = self.threads.write().await;
        let thread = threads.entry(turn.ticket_id().to_string()).or_default();
        thread.push(turn);
        Ok(())
    }

    async fn get_history(
        &self,
        ticket_id: &str,
        limit: HistoryLimit,
    ) -> Result<Vec<ConversationTurn>, CapabilityError> {
        let threads = self.threads.read().await;
        let thread = threads
            .get(ticket_id)
            .ok_or_else(|| CapabilityError::not_found("Conversation", ticket_id))?;

        let start = thread.len().saturating_sub(limit.get());
        Ok(thread[start..].to_vec())
    }
}
