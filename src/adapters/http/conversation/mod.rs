//! HTTP adapter for conversation memory endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ConversationHistoryResponse, ConversationTurnRequest, ConversationTurnResponse, HistoryParams,
};
pub use handlers::ConversationHandlers;
pub use routes::conversation_routes;
