//! HTTP routes for the ticket capability endpoints.

use axum::{routing::post, Router};

use super::handlers::{auto_resolve, classify, estimate_resolution_time, find_similar, TicketHandlers};

/// Creates the router for classification, resolution time, similarity and
/// auto-resolution.
pub fn ticket_routes(handlers: TicketHandlers) -> Router {
    Router::new()
        .route("/v1/classification", post(classify))
        .route("/v1/resolution-time", post(estimate_resolution_time))
        .route("/v1/similarity", post(find_similar))
        .route("/v1/auto-resolution", post(auto_resolve))
        .with_state(handlers)
}
