//! HTTP handlers for the ticket capability endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{ValidatedJson, ValidatedQuery};
use crate::adapters::http::mapping::ticket_from_request;
use crate::application::handlers::ticket::{
    AutoResolveTicketHandler, AutoResolveTicketQuery, ClassifyTicketCommand,
    ClassifyTicketHandler, EstimateResolutionTimeHandler, EstimateResolutionTimeQuery,
    FindSimilarTicketsHandler, FindSimilarTicketsQuery,
};
use crate::application::CapabilityRegistry;
use crate::domain::foundation::{Timestamp, TopK};

use super::dto::{
    AutoResolutionResponse, ClassificationResponse, ResolutionTimeResponse, SimilarityParams,
    SimilarityResponse, TicketRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TicketHandlers {
    classify_handler: Arc<ClassifyTicketHandler>,
    estimate_handler: Arc<EstimateResolutionTimeHandler>,
    similar_handler: Arc<FindSimilarTicketsHandler>,
    auto_resolve_handler: Arc<AutoResolveTicketHandler>,
}

impl TicketHandlers {
    pub fn from_registry(registry: &CapabilityRegistry) -> Self {
        Self {
            classify_handler: Arc::new(ClassifyTicketHandler::new(registry.classification())),
            estimate_handler: Arc::new(EstimateResolutionTimeHandler::new(
                registry.resolution_time(),
            )),
            similar_handler: Arc::new(FindSimilarTicketsHandler::new(registry.similarity())),
            auto_resolve_handler: Arc::new(AutoResolveTicketHandler::new(
                registry.auto_resolution(),
            )),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /v1/classification - Classify a ticket
pub async fn classify(
    State(handlers): State<TicketHandlers>,
    ValidatedJson(req): ValidatedJson<TicketRequest>,
) -> Result<Json<ClassificationResponse>, ApiError> {
    let ticket = ticket_from_request(&req, Timestamp::now())?;
    let outcome = handlers
        .classify_handler
        .handle(ClassifyTicketCommand { ticket })
        .await?;
    Ok(Json(ClassificationResponse::from(&outcome)))
}

/// POST /v1/resolution-time - Estimate hours to resolution
pub async fn estimate_resolution_time(
    State(handlers): State<TicketHandlers>,
    ValidatedJson(req): ValidatedJson<TicketRequest>,
) -> Result<Json<ResolutionTimeResponse>, ApiError> {
    let ticket = ticket_from_request(&req, Timestamp::now())?;
    let outcome = handlers
        .estimate_handler
        .handle(EstimateResolutionTimeQuery { ticket })
        .await?;
    Ok(Json(outcome.into()))
}

/// POST /v1/similarity?top_k= - Find similar tickets
///
/// `top_k` is checked before the body is mapped or any capability is called.
pub async fn find_similar(
    State(handlers): State<TicketHandlers>,
    ValidatedQuery(params): ValidatedQuery<SimilarityParams>,
    ValidatedJson(req): ValidatedJson<TicketRequest>,
) -> Result<Json<SimilarityResponse>, ApiError> {
    let top_k = match params.top_k {
        Some(raw) => TopK::try_new(raw)?,
        None => TopK::default(),
    };
    let ticket = ticket_from_request(&req, Timestamp::now())?;
    let matches = handlers
        .similar_handler
        .handle(FindSimilarTicketsQuery { ticket, top_k })
        .await?;
    Ok(Json(matches.into()))
}

/// POST /v1/auto-resolution - Generate a grounded resolution
pub async fn auto_resolve(
    State(handlers): State<TicketHandlers>,
    ValidatedJson(req): ValidatedJson<TicketRequest>,
) -> Result<Json<AutoResolutionResponse>, ApiError> {
    let ticket = ticket_from_request(&req, Timestamp::now())?;
    let outcome = handlers
        .auto_resolve_handler
        .handle(AutoResolveTicketQuery { ticket })
        .await?;
    Ok(Json(outcome.into()))
}
