//! ConversationTurn entity.

use crate::domain::foundation::{Timestamp, ValidationError};

/// One exchange in a ticket's conversation thread.
///
/// `assistant_message` is absent when only the user side is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    ticket_id: String,
    user_message: String,
    assistant_message: Option<String>,
    created_at: Timestamp,
}

impl ConversationTurn {
    /// Creates a user-only turn stamped now.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the thread id or user message is empty.
    pub fn new(
        ticket_id: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let ticket_id = ticket_id.into();
        let user_message = user_message.into();

        if ticket_id.is_empty() {
            return Err(ValidationError::empty_field("ticket_id"));
        }
        if user_message.is_empty() {
            return Err(ValidationError::empty_field("user_message"));
        }

        Ok(Self {
            ticket_id,
            user_message,
            assistant_message: None,
            created_at: Timestamp::now(),
        })
    }

    pub fn with_assistant_message(mut self, assistant_message: Option<String>) -> Self {
        self.assistant_message = assistant_message;
        self
    }

    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = created_at;
        self
    }

    /// Thread identifier.
    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn assistant_message(&self) -> Option<&str> {
        self.assistant_message.as_deref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_turn_is_user_only() {
        let turn = ConversationTurn::new("T1", "hi").unwrap();
        assert_eq!(turn.ticket_id(), "T1");
        assert_eq!(turn.user_message(), "hi");
        assert!(turn.assistant_message().is_none());
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(
            ConversationTurn::new("", "hi").unwrap_err().field(),
            "ticket_id"
        );
        assert_eq!(
            ConversationTurn::new("T1", "").unwrap_err().field(),
            "user_message"
        );
    }

    #[test]
    fn whitespace_message_is_kept() {
        let turn = ConversationTurn::new("T1", "  ").unwrap();
        assert_eq!(turn.user_message(), "  ");
    }

    #[test]
    fn builder_sets_assistant_and_timestamp() {
        let ts = Timestamp::now();
        let turn = ConversationTurn::new("T1", "hi")
            .unwrap()
            .with_assistant_message(Some("hello".to_string()))
            .with_created_at(ts);
        assert_eq!(turn.assistant_message(), Some("hello"));
        assert_eq!(turn.created_at(), ts);
    }
}
