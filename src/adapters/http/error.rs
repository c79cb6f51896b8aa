//! HTTP error translation.
//!
//! Every failure leaves the boundary as JSON `{"code", "detail", "field"?}`.
//! `detail` is plain text; for an unbound capability it is the capability's
//! own message, unchanged.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{CapabilityError, ValidationError};

/// Uniform error body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Any failure an endpoint can report.
#[derive(Debug)]
pub enum ApiError {
    /// Request failed domain validation.
    Validation(ValidationError),
    /// The capability call failed.
    Capability(CapabilityError),
    /// The request body or query could not be read.
    Rejected { status: StatusCode, detail: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Capability(CapabilityError::Unavailable { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Capability(CapabilityError::Upstream { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::Capability(CapabilityError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Rejected { status, .. } => *status,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Validation(err) => {
                ErrorResponse::new("VALIDATION_FAILED", err.to_string()).with_field(err.field())
            }
            ApiError::Capability(err) => {
                let code = match err {
                    CapabilityError::Unavailable { .. } => "SERVICE_UNAVAILABLE",
                    CapabilityError::Upstream { .. } => "UPSTREAM_FAILURE",
                    CapabilityError::NotFound { .. } => "NOT_FOUND",
                };
                ErrorResponse::new(code, err.to_string())
            }
            ApiError::Rejected { status, detail } => {
                let code = match *status {
                    StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_ENTITY",
                    StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
                    StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
                    _ => "BAD_REQUEST",
                };
                ErrorResponse::new(code, detail.clone())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<CapabilityError> for ApiError {
    fn from(err: CapabilityError) -> Self {
        ApiError::Capability(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    /// Query strings that do not deserialize are validation failures.
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();

        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), code = %body.code, detail = %body.detail, "request_failed");
        } else {
            tracing::debug!(status = status.as_u16(), code = %body.code, detail = %body.detail, "request_rejected");
        }

        (status, Json(body)).into_response()
    }
}
