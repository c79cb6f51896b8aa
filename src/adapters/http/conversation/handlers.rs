//! HTTP handlers for conversation memory endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{ValidatedJson, ValidatedQuery};
use crate::adapters::http::mapping::turn_from_request;
use crate::application::handlers::conversation::{
    AppendTurnCommand, AppendTurnHandler, GetHistoryHandler, GetHistoryQuery,
};
use crate::application::CapabilityRegistry;
use crate::domain::foundation::{HistoryLimit, Timestamp};

use super::dto::{ConversationHistoryResponse, ConversationTurnRequest, HistoryParams};

#[derive(Clone)]
pub struct ConversationHandlers {
    append_handler: Arc<AppendTurnHandler>,
    history_handler: Arc<GetHistoryHandler>,
}

impl ConversationHandlers {
    pub fn from_registry(registry: &CapabilityRegistry) -> Self {
        let memory = registry.conversation();
        Self {
            append_handler: Arc::new(AppendTurnHandler::new(Arc::clone(&memory))),
            history_handler: Arc::new(GetHistoryHandler::new(memory)),
        }
    }
}

/// POST /v1/conversation - Append a turn (202, empty body)
pub async fn append_turn(
    State(handlers): State<ConversationHandlers>,
    ValidatedJson(req): ValidatedJson<ConversationTurnRequest>,
) -> Result<StatusCode, ApiError> {
    let turn = turn_from_request(&req, Timestamp::now())?;
    handlers
        .append_handler
        .handle(AppendTurnCommand { turn })
        .await?;
    Ok(StatusCode::ACCEPTED)
}

/// GET /v1/conversation/:ticket_id?limit= - Recent turns, in commit order
pub async fn get_history(
    State(handlers): State<ConversationHandlers>,
    Path(ticket_id): Path<String>,
    ValidatedQuery(params): ValidatedQuery<HistoryParams>,
) -> Result<Json<ConversationHistoryResponse>, ApiError> {
    let limit = match params.limit {
        Some(raw) => HistoryLimit::try_new(raw)?,
        None => HistoryLimit::default(),
    };
    let turns = handlers
        .history_handler
        .handle(GetHistoryQuery { ticket_id, limit })
        .await?;
    Ok(Json(turns.into()))
}
