//! Classification port - predicts a ticket's category.
//!
//! Implementations wrap a classifier backend (hosted model endpoint, local
//! model, rules engine). The boundary never substitutes a default prediction
//! when this port fails.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct KeywordClassifier;
//!
//! #[async_trait]
//! impl ClassificationService for KeywordClassifier {
//!     async fn classify(&self, ticket: &Ticket) -> Result<ClassificationOutcome, CapabilityError> {
//!         let category = if ticket.text().contains("invoice") {
//!             TicketCategory::Billing
//!         } else {
//!             TicketCategory::Other
//!         };
//!         Ok(ClassificationOutcome::new(category, 0.6))
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::CapabilityError;
use crate::domain::ticket::{ClassificationOutcome, Ticket};

/// Port for ticket classification.
#[async_trait]
pub trait ClassificationService: Send + Sync {
    /// Predict the category of a ticket.
    ///
    /// # Errors
    ///
    /// - `Unavailable` when no backend is bound
    /// - `Upstream` when the backend fails (timeout, malformed model response)
    async fn classify(&self, ticket: &Ticket) -> Result<ClassificationOutcome, CapabilityError>;
}
