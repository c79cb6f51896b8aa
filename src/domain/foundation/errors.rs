//! Error types for the domain layer.

use thiserror::Error;

use super::Capability;

/// Errors that occur during value object and entity construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Failure reported by a capability operation.
///
/// Part of every capability's declared contract: a capability either returns
/// its outcome or one of these, never a placeholder value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// No backend is bound. Recoverable by operator configuration.
    #[error("{message}")]
    Unavailable {
        capability: Capability,
        message: String,
    },

    /// A bound backend was reached but failed (timeout, malformed response, ...).
    #[error("{dependency} failure: {message}")]
    Upstream { dependency: String, message: String },

    /// A referenced ticket or thread does not exist.
    #[error("{resource} with identifier '{id}' not found.")]
    NotFound { resource: String, id: String },
}

impl CapabilityError {
    /// The canonical "not configured" failure for a capability.
    pub fn not_configured(capability: Capability) -> Self {
        CapabilityError::Unavailable {
            capability,
            message: capability.not_configured_message(),
        }
    }

    /// Creates an upstream failure naming the failing dependency.
    pub fn upstream(dependency: impl Into<String>, message: impl Into<String>) -> Self {
        CapabilityError::Upstream {
            dependency: dependency.into(),
            message: message.into(),
        }
    }

    /// Creates a not-found failure.
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        CapabilityError::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }
}
