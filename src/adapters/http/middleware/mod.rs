//! HTTP middleware for axum.
//!
//! - `request_logging` - Structured per-request completion events

pub mod request_logging;

pub use request_logging::{request_logging, REQUEST_ID_HEADER};
