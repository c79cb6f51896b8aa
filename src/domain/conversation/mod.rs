//! Conversation domain module.
//!
//! Conversation memory is a per-ticket thread of turns, kept in
//! the order the conversation capability commits them.

mod turn;

pub use turn::ConversationTurn;
