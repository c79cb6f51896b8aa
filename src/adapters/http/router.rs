//! Router assembly.
//!
//! `api_routes` is the bare API used by tests; `build_router` adds the
//! request-id, request logging and CORS layers used by the server.
//!
//! Layer order, outermost first: set request id, propagate request id,
//! request logging, CORS.

use axum::{
    http::{HeaderName, HeaderValue, Method},
    middleware, Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
};

use super::conversation::{conversation_routes, ConversationHandlers};
use super::middleware::{request_logging, REQUEST_ID_HEADER};
use super::ticket::{ticket_routes, TicketHandlers};
use crate::application::CapabilityRegistry;
use crate::config::{ServerConfig, ValidationError};

/// All endpoints, without cross-cutting layers.
pub fn api_routes(registry: &CapabilityRegistry) -> Router {
    Router::new()
        .merge(ticket_routes(TicketHandlers::from_registry(registry)))
        .merge(conversation_routes(ConversationHandlers::from_registry(registry)))
}

/// The full application router.
///
/// # Errors
///
/// Returns a `ValidationError` when the CORS settings contain values that are
/// not valid header values, methods or header names.
pub fn build_router(
    registry: &CapabilityRegistry,
    server: &ServerConfig,
) -> Result<Router, ValidationError> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Ok(api_routes(registry)
        .layer(cors_layer(server)?)
        .layer(middleware::from_fn(request_logging))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid)))
}

/// CORS policy from server configuration.
///
/// Credentials are never allowed; a wildcard origin cannot be combined with
/// them.
pub fn cors_layer(server: &ServerConfig) -> Result<CorsLayer, ValidationError> {
    let origins = if server.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let values = server
            .cors_origins_list()
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(&origin).map_err(|_| ValidationError::InvalidCorsOrigin(origin))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(values)
    };

    let methods = server
        .cors_methods_list()
        .into_iter()
        .map(|method| {
            Method::from_bytes(method.as_bytes()).map_err(|_| ValidationError::InvalidCorsMethod(method))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let header_list = server.cors_headers_list();
    let headers = if header_list.iter().any(|header| header == "*") {
        AllowHeaders::any()
    } else {
        let names = header_list
            .into_iter()
            .map(|header| {
                HeaderName::from_bytes(header.as_bytes())
                    .map_err(|_| ValidationError::InvalidCorsHeader(header))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowHeaders::list(names)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers))
}
