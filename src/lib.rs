//! Ticket Intelligence - service boundary for support-ticket capabilities
//!
//! Exposes classification, resolution-time estimation, similar-ticket search,
//! grounded auto-resolution and conversation memory over HTTP. Each capability
//! is a port with exactly one binding per process; unbound capabilities
//! answer 503 with "{Capability} service is not yet configured."

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
pub mod telemetry;
