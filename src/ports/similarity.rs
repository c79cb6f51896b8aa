//! Similarity port - nearest-neighbour search over past tickets.
//!
//! # Ordering contract
//!
//! Results are sorted by `similarity_score` descending, ties broken by
//! `ticket_id` ascending, and hold at most `top_k` entries. An empty result
//! (nothing above the backend's relevance floor) is a success, not an error.

use async_trait::async_trait;

use crate::domain::foundation::{CapabilityError, TopK};
use crate::domain::ticket::{SimilarTicket, Ticket};

/// Port for finding tickets similar to a query ticket.
#[async_trait]
pub trait SimilarityService: Send + Sync {
    async fn find_similar(
        &self,
        ticket: &Ticket,
        top_k: TopK,
    ) -> Result<Vec<SimilarTicket>, CapabilityError>;
}
