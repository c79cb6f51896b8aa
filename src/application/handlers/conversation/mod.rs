//! Conversation memory handlers.

mod append_turn;
mod get_history;

pub use append_turn::{AppendTurnCommand, AppendTurnHandler};
pub use get_history::{GetHistoryHandler, GetHistoryQuery};
