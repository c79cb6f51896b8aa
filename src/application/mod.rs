//! Application layer - Capability registry, commands, queries, and handlers.
//!
//! This layer resolves the capability bindings and orchestrates calls to them.

pub mod handlers;
mod registry;

pub use registry::{CapabilityRegistry, CapabilityRegistryBuilder};
