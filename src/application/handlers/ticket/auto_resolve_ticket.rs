//! AutoResolveTicketHandler - Query handler for grounded auto-resolution.

use std::sync::Arc;

use crate::domain::foundation::CapabilityError;
use crate::domain::ticket::{AutoResolutionOutcome, Ticket};
use crate::ports::AutoResolutionService;

/// Query for a generated resolution.
#[derive(Debug, Clone)]
pub struct AutoResolveTicketQuery {
    pub ticket: Ticket,
}

pub struct AutoResolveTicketHandler {
    generator: Arc<dyn AutoResolutionService>,
}

impl AutoResolveTicketHandler {
    pub fn new(generator: Arc<dyn AutoResolutionService>) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        query: AutoResolveTicketQuery,
    ) -> Result<AutoResolutionOutcome, CapabilityError> {
        let outcome = self.generator.generate(&query.ticket).await?;

        tracing::debug!(
            ticket_id = query.ticket.ticket_id(),
            grounding_count = outcome.grounding_ticket_ids().len(),
            "auto_resolution_generated"
        );

        Ok(outcome)
    }
}
