//! Request completion logging.
//!
//! Emits one `request_completed` event per request with method, path,
//! status code and elapsed milliseconds. Mounted outside CORS so preflight
//! requests are logged too.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Header carrying the request id set by the request-id layer.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn request_logging(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let response = next.run(request).await;

    let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(
        method = %method,
        path = %path,
        status_code = response.status().as_u16(),
        duration_ms = (duration_ms * 100.0).round() / 100.0,
        request_id = %request_id,
        "request_completed"
    );

    response
}
