//! FindSimilarTicketsHandler - Query handler for similar-ticket search.
//!
//! Results are re-ranked (score descending, ticket id ascending) and cut to
//! `top_k` whatever order the backend returned them in.

use std::sync::Arc;

use crate::domain::foundation::{CapabilityError, TopK};
use crate::domain::ticket::{rank_similar, SimilarTicket, Ticket};
use crate::ports::SimilarityService;

/// Query for tickets resembling the given one.
#[derive(Debug, Clone)]
pub struct FindSimilarTicketsQuery {
    pub ticket: Ticket,
    pub top_k: TopK,
}

pub struct FindSimilarTicketsHandler {
    search: Arc<dyn SimilarityService>,
}

impl FindSimilarTicketsHandler {
    pub fn new(search: Arc<dyn SimilarityService>) -> Self {
        Self { search }
    }

    pub async fn handle(
        &self,
        query: FindSimilarTicketsQuery,
    ) -> Result<Vec<SimilarTicket>, CapabilityError> {
        let matches = self.search.find_similar(&query.ticket, query.top_k).await?;
        Ok(rank_similar(matches, query.top_k))
    }
}
