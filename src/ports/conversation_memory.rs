//! Conversation memory port.
//!
//! Stores the turns of each ticket's thread so later generations can use them
//! as context.
//!
//! # Ordering
//!
//! - Appends for one ticket are observable in the order the store commits them.
//! - `get_history` reflects every previously committed append for that ticket
//!   (read-your-writes within one store).
//! - History is returned in commit order, earliest commit first. `created_at`
//!   is carried as data and does not affect ordering.

use async_trait::async_trait;

use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::{CapabilityError, HistoryLimit};

/// Port for conversation memory.
#[async_trait]
pub trait ConversationService: Send + Sync {
    /// Persist a turn. Ownership of the turn passes to the store.
    async fn append_turn(&self, turn: ConversationTurn) -> Result<(), CapabilityError>;

    /// Return at most `limit` most-recent turns for a thread.
    ///
    /// The returned window is in commit order, earliest first.
    ///
    /// # Errors
    ///
    /// `NotFound` if the store has no thread for `ticket_id`.
    async fn get_history(
        &self,
        ticket_id: &str,
        limit: HistoryLimit,
    ) -> Result<Vec<ConversationTurn>, CapabilityError>;
}
