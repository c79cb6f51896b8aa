//! Ticket entity.

use crate::domain::foundation::{Timestamp, ValidationError};

use super::{ClassificationOutcome, TicketCategory, TicketPriority};

/// A customer support ticket as seen by the capabilities.
///
/// Built fresh for every request and never persisted by the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    ticket_id: String,
    text: String,
    customer_id: Option<String>,
    created_at: Timestamp,
    priority: TicketPriority,
    category: Option<TicketCategory>,
}

impl Ticket {
    /// Creates an unassigned ticket with medium priority created now.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if `text` is empty. Whitespace is kept as given.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ValidationError::empty_field("ticket_text"));
        }
        Ok(Self {
            ticket_id: String::new(),
            text,
            customer_id: None,
            created_at: Timestamp::now(),
            priority: TicketPriority::default(),
            category: None,
        })
    }

    pub fn with_id(mut self, ticket_id: impl Into<String>) -> Self {
        self.ticket_id = ticket_id.into();
        self
    }

    pub fn with_customer_id(mut self, customer_id: Option<String>) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Records the category produced by a classification outcome.
    ///
    /// This is the only way a category reaches a ticket.
    pub fn classified_as(mut self, outcome: &ClassificationOutcome) -> Self {
        self.category = Some(outcome.category());
        self
    }

    /// Identifier; empty when not yet assigned.
    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn priority(&self) -> TicketPriority {
        self.priority
    }

    pub fn category(&self) -> Option<TicketCategory> {
        self.category
    }

    /// True when the client did not supply an identifier.
    pub fn is_unassigned(&self) -> bool {
        self.ticket_id.is_empty()
    }
}
