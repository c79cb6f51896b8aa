//! EstimateResolutionTimeHandler - Query handler for resolution-time estimates.

use std::sync::Arc;

use crate::domain::foundation::CapabilityError;
use crate::domain::ticket::{ResolutionTimeOutcome, Ticket};
use crate::ports::ResolutionTimeService;

/// Query for a ticket's expected time to resolution.
#[derive(Debug, Clone)]
pub struct EstimateResolutionTimeQuery {
    pub ticket: Ticket,
}

pub struct EstimateResolutionTimeHandler {
    estimator: Arc<dyn ResolutionTimeService>,
}

impl EstimateResolutionTimeHandler {
    pub fn new(estimator: Arc<dyn ResolutionTimeService>) -> Self {
        Self { estimator }
    }

    pub async fn handle(
        &self,
        query: EstimateResolutionTimeQuery,
    ) -> Result<ResolutionTimeOutcome, CapabilityError> {
        self.estimator.estimate(&query.ticket).await
    }
}
