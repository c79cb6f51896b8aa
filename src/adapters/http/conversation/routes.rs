//! HTTP routes for conversation memory endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{append_turn, get_history, ConversationHandlers};

/// Creates the conversation router.
pub fn conversation_routes(handlers: ConversationHandlers) -> Router {
    Router::new()
        .route("/v1/conversation", post(append_turn))
        .route("/v1/conversation/:ticket_id", get(get_history))
        .with_state(handlers)
}
