//! Memory Adapters
//!
//! Process-local backends for capabilities that can run without external
//! infrastructure.
//!
//! ## Available Adapters
//!
//! - **InMemoryConversationStore** - Conversation memory kept in process

mod conversation_store;

pub use conversation_store::InMemoryConversationStore;
