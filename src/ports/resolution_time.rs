//! Resolution time port - regression over ticket features.

use async_trait::async_trait;

use crate::domain::foundation::CapabilityError;
use crate::domain::ticket::{ResolutionTimeOutcome, Ticket};

/// Port for estimating how long a ticket will take to resolve.
#[async_trait]
pub trait ResolutionTimeService: Send + Sync {
    /// Estimate hours to resolution. Same failure taxonomy as classification.
    async fn estimate(&self, ticket: &Ticket) -> Result<ResolutionTimeOutcome, CapabilityError>;
}
