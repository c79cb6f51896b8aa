//! Auto-resolution port - retrieval-augmented answer generation.
//!
//! # Grounding contract
//!
//! `grounding_ticket_ids` must name the tickets the backend actually used as
//! evidence. The response text and the grounding set are produced by the same
//! retrieval pass and returned together in one [`AutoResolutionOutcome`].

use async_trait::async_trait;

use crate::domain::foundation::CapabilityError;
use crate::domain::ticket::{AutoResolutionOutcome, Ticket};

/// Port for generating a grounded resolution for a ticket.
#[async_trait]
pub trait AutoResolutionService: Send + Sync {
    async fn generate(&self, ticket: &Ticket) -> Result<AutoResolutionOutcome, CapabilityError>;
}
