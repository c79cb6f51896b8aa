//! HTTP DTOs for conversation memory endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::Timestamp;

/// A turn submitted for storage.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConversationTurnRequest {
    pub ticket_id: String,
    pub user_message: String,
    #[serde(default)]
    pub assistant_message: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Query parameters for history retrieval.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationTurnResponse {
    pub ticket_id: String,
    pub user_message: String,
    pub assistant_message: Option<String>,
    pub created_at: Timestamp,
}

impl From<ConversationTurn> for ConversationTurnResponse {
    fn from(turn: ConversationTurn) -> Self {
        Self {
            ticket_id: turn.ticket_id().to_string(),
            user_message: turn.user_message().to_string(),
            assistant_message: turn.assistant_message().map(str::to_string),
            created_at: turn.created_at(),
        }
    }
}

/// Turns of one thread, in commit order.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationHistoryResponse {
    pub history: Vec<ConversationTurnResponse>,
}

impl From<Vec<ConversationTurn>> for ConversationHistoryResponse {
    fn from(turns: Vec<ConversationTurn>) -> Self {
        Self {
            history: turns.into_iter().map(Into::into).collect(),
        }
    }
}
