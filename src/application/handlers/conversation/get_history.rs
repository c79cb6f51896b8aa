//! GetHistoryHandler - Query handler for a thread's recent turns.
//!
//! Returns at most `limit` of the most recently committed turns, in the order
//! the backend committed them.

use std::sync::Arc;

use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::{CapabilityError, HistoryLimit};
use crate::ports::ConversationService;

/// Query for a thread's history.
#[derive(Debug, Clone)]
pub struct GetHistoryQuery {
    pub ticket_id: String,
    pub limit: HistoryLimit,
}

pub struct GetHistoryHandler {
    memory: Arc<dyn ConversationService>,
}

impl GetHistoryHandler {
    pub fn new(memory: Arc<dyn ConversationService>) -> Self {
        Self { memory }
    }

    pub async fn handle(
        &self,
        query: GetHistoryQuery,
    ) -> Result<Vec<ConversationTurn>, CapabilityError> {
        let mut turns = self.memory.get_history(&query.ticket_id, query.limit).await?;

        let start = turns.len().saturating_sub(query.limit.get());
        Ok(turns.split_off(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockConversation;
    use crate::domain::foundation::Timestamp;
    use chrono::{TimeZone, Utc};

    fn turn(message: &str, second: u32) -> ConversationTurn {
        ConversationTurn::new("T1", message)
            .unwrap()
            .with_created_at(Timestamp::from_datetime(
                Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, second).unwrap(),
            ))
    }

    fn query(limit: i64) -> GetHistoryQuery {
        GetHistoryQuery {
            ticket_id: "T1".to_string(),
            limit: HistoryLimit::try_new(limit).unwrap(),
        }
    }

    #[tokio::test]
    async fn keeps_backend_commit_order() {
        let mock = MockConversation::new().with_history(vec![
            turn("late", 30),
            turn("early", 10),
            turn("middle", 20),
        ]);
        let handler = GetHistoryHandler::new(Arc::new(mock));

        let history = handler.handle(query(10)).await.unwrap();

        let messages: Vec<&str> = history.iter().map(|t| t.user_message()).collect();
        assert_eq!(messages, vec!["late", "early", "middle"]);
    }

    #[tokio::test]
    async fn window_is_most_recent_commits() {
        let mock = MockConversation::new().with_history(vec![
            turn("one", 30),
            turn("two", 10),
            turn("three", 20),
        ]);
        let handler = GetHistoryHandler::new(Arc::new(mock));

        let history = handler.handle(query(2)).await.unwrap();

        let messages: Vec<&str> = history.iter().map(|t| t.user_message()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[tokio::test]
    async fn propagates_not_found() {
        let mock =
            MockConversation::new().with_error(CapabilityError::not_found("Conversation", "T1"));
        let handler = GetHistoryHandler::new(Arc::new(mock));

        let err = handler.handle(query(10)).await.unwrap_err();
        assert_eq!(err, CapabilityError::not_found("Conversation", "T1"));
    }
}
