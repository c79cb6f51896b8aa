//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, capability identifiers, and error types
//! that form the vocabulary of the ticket intelligence domain.

mod bounds;
mod capability;
mod errors;
mod score;
mod timestamp;

pub use bounds::{HistoryLimit, TopK};
pub use capability::Capability;
pub use errors::{CapabilityError, ValidationError};
pub use score::{Hours, UnitScore};
pub use timestamp::Timestamp;
