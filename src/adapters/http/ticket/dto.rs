//! HTTP DTOs for the ticket capability endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ticket::{
    AutoResolutionOutcome, ClassificationOutcome, ResolutionTimeOutcome, SimilarTicket,
    TicketCategory,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Ticket payload shared by every ticket endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TicketRequest {
    #[serde(default)]
    pub ticket_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub ticket_text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Unrecognised values are treated as medium.
    #[serde(default)]
    pub priority: Option<String>,
}

/// Query parameters for similarity search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimilarityParams {
    pub top_k: Option<i64>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResponse {
    pub category: TicketCategory,
    pub confidence: f64,
}

impl From<&ClassificationOutcome> for ClassificationResponse {
    fn from(outcome: &ClassificationOutcome) -> Self {
        Self {
            category: outcome.category(),
            confidence: outcome.confidence().value(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolutionTimeResponse {
    pub estimated_resolution_hours: f64,
}

impl From<ResolutionTimeOutcome> for ResolutionTimeResponse {
    fn from(outcome: ResolutionTimeOutcome) -> Self {
        Self {
            estimated_resolution_hours: outcome.estimated_hours().value(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimilarTicketResponse {
    pub ticket_id: String,
    pub similarity_score: f64,
    pub summary: String,
}

impl From<SimilarTicket> for SimilarTicketResponse {
    fn from(similar: SimilarTicket) -> Self {
        Self {
            ticket_id: similar.ticket_id().to_string(),
            similarity_score: similar.similarity_score().value(),
            summary: similar.summary().to_string(),
        }
    }
}

/// Similar tickets, best match first.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResponse {
    pub duplicates: Vec<SimilarTicketResponse>,
}

impl From<Vec<SimilarTicket>> for SimilarityResponse {
    fn from(matches: Vec<SimilarTicket>) -> Self {
        Self {
            duplicates: matches.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AutoResolutionResponse {
    pub auto_resolution: String,
    pub grounding_ticket_ids: Vec<String>,
}

impl From<AutoResolutionOutcome> for AutoResolutionResponse {
    fn from(outcome: AutoResolutionOutcome) -> Self {
        let (auto_resolution, grounding_ticket_ids) = outcome.into_parts();
        Self {
            auto_resolution,
            grounding_ticket_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_request_deserializes() {
        let req: TicketRequest =
            serde_json::from_value(json!({"ticket_text": "Cannot log in"})).unwrap();
        assert_eq!(req.ticket_text, "Cannot log in");
        assert!(req.ticket_id.is_none());
        assert!(req.priority.is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<TicketRequest, _> =
            serde_json::from_value(json!({"ticket_text": "x", "category": "billing"}));
        assert!(result.is_err());
    }

    #[test]
    fn missing_text_is_rejected() {
        let result: Result<TicketRequest, _> = serde_json::from_value(json!({"ticket_id": "T1"}));
        assert!(result.is_err());
    }

    #[test]
    fn classification_response_uses_lowercase_category() {
        let outcome = ClassificationOutcome::new(TicketCategory::Usability, 0.5);
        let value = serde_json::to_value(ClassificationResponse::from(&outcome)).unwrap();
        assert_eq!(value, json!({"category": "usability", "confidence": 0.5}));
    }

    #[test]
    fn auto_resolution_response_keeps_field_names() {
        let outcome = AutoResolutionOutcome::new("Do X", vec!["T-1".to_string()]);
        let value = serde_json::to_value(AutoResolutionResponse::from(outcome)).unwrap();
        assert_eq!(
            value,
            json!({"auto_resolution": "Do X", "grounding_ticket_ids": ["T-1"]})
        );
    }
}
