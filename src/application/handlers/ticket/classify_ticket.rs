//! ClassifyTicketHandler - Command handler for classifying a ticket.
//!
//! A ticket's category comes only from the classifier's outcome.

use std::sync::Arc;

use crate::domain::foundation::CapabilityError;
use crate::domain::ticket::{ClassificationOutcome, Ticket};
use crate::ports::ClassificationService;

/// Command to classify a ticket.
#[derive(Debug, Clone)]
pub struct ClassifyTicketCommand {
    pub ticket: Ticket,
}

/// Handler for classifying tickets.
pub struct ClassifyTicketHandler {
    classifier: Arc<dyn ClassificationService>,
}

impl ClassifyTicketHandler {
    pub fn new(classifier: Arc<dyn ClassificationService>) -> Self {
        Self { classifier }
    }

    pub async fn handle(
        &self,
        cmd: ClassifyTicketCommand,
    ) -> Result<ClassificationOutcome, CapabilityError> {
        let outcome = self.classifier.classify(&cmd.ticket).await?;
        let ticket = cmd.ticket.classified_as(&outcome);

        tracing::debug!(
            ticket_id = ticket.ticket_id(),
            priority = ticket.priority().as_str(),
            category = ticket.category().map(|c| c.as_str()),
            confidence = outcome.confidence().value(),
            "ticket_classified"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockClassification;
    use crate::domain::foundation::Capability;
    use crate::domain::ticket::TicketCategory;

    fn command() -> ClassifyTicketCommand {
        ClassifyTicketCommand {
            ticket: Ticket::new("Cannot log in").unwrap().with_id("T-1"),
        }
    }

    #[tokio::test]
    async fn returns_classifier_outcome() {
        let mock = MockClassification::new()
            .with_outcome(ClassificationOutcome::new(TicketCategory::Authentication, 0.92));
        let handler = ClassifyTicketHandler::new(Arc::new(mock));

        let outcome = handler.handle(command()).await.unwrap();

        assert_eq!(outcome.category(), TicketCategory::Authentication);
        assert_eq!(outcome.confidence().value(), 0.92);
    }

    #[tokio::test]
    async fn propagates_unavailable() {
        let handler = ClassifyTicketHandler::new(Arc::new(MockClassification::new()));

        let err = handler.handle(command()).await.unwrap_err();
        assert_eq!(err, CapabilityError::not_configured(Capability::Classification));
    }

    #[tokio::test]
    async fn propagates_upstream_without_fallback() {
        let mock = MockClassification::new()
            .with_error(CapabilityError::upstream("Classification", "malformed response"));
        let handler = ClassifyTicketHandler::new(Arc::new(mock));

        let err = handler.handle(command()).await.unwrap_err();
        assert!(matches!(err, CapabilityError::Upstream { .. }));
    }
}
