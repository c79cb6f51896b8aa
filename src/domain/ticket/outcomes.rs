//! Outcome records returned by the capabilities.
//!
//! All outcomes are immutable, transient values. Scores are clamped to
//! [0, 1] and hours to >= 0 on construction.

use std::cmp::Ordering;

use crate::domain::foundation::{Hours, TopK, UnitScore};

use super::TicketCategory;

/// Result of classifying a ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationOutcome {
    category: TicketCategory,
    confidence: UnitScore,
}

impl ClassificationOutcome {
    pub fn new(category: TicketCategory, confidence: f64) -> Self {
        Self {
            category,
            confidence: UnitScore::new(confidence),
        }
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn confidence(&self) -> UnitScore {
        self.confidence
    }
}

/// Predicted time to resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionTimeOutcome {
    estimated_hours: Hours,
}

impl ResolutionTimeOutcome {
    pub fn new(estimated_hours: f64) -> Self {
        Self {
            estimated_hours: Hours::new(estimated_hours),
        }
    }

    pub fn estimated_hours(&self) -> Hours {
        self.estimated_hours
    }
}

/// A previously seen ticket that resembles the query ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarTicket {
    ticket_id: String,
    similarity_score: UnitScore,
    summary: String,
}

impl SimilarTicket {
    pub fn new(ticket_id: impl Into<String>, similarity_score: f64, summary: impl Into<String>) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            similarity_score: UnitScore::new(similarity_score),
            summary: summary.into(),
        }
    }

    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    pub fn similarity_score(&self) -> UnitScore {
        self.similarity_score
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Result ordering: score descending, then ticket id ascending.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .similarity_score
            .total_cmp(&self.similarity_score)
            .then_with(|| self.ticket_id.cmp(&other.ticket_id))
    }
}

/// Sorts matches into result order and keeps at most `top_k` of them.
pub fn rank_similar(mut matches: Vec<SimilarTicket>, top_k: TopK) -> Vec<SimilarTicket> {
    matches.sort_by(SimilarTicket::rank_cmp);
    matches.truncate(top_k.get());
    matches
}

/// A generated resolution and the tickets it was grounded on.
///
/// Both halves come from the same retrieval pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoResolutionOutcome {
    response: String,
    grounding_ticket_ids: Vec<String>,
}

impl AutoResolutionOutcome {
    pub fn new(response: impl Into<String>, grounding_ticket_ids: Vec<String>) -> Self {
        Self {
            response: response.into(),
            grounding_ticket_ids,
        }
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Evidence tickets in the order the backend used them.
    pub fn grounding_ticket_ids(&self) -> &[String] {
        &self.grounding_ticket_ids
    }

    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.response, self.grounding_ticket_ids)
    }
}
