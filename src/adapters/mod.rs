//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `http` - The axum service boundary
//! - `not_configured` - Default bindings that report "not yet configured"
//! - `memory` - Process-local conversation store
//! - `resilience` - Timeout decorator for bound backends
//! - `mock` - Configurable test doubles for every capability

pub mod http;
pub mod memory;
pub mod mock;
pub mod not_configured;
pub mod resilience;
