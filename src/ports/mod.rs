//! Ports - Interfaces for the capabilities behind the boundary.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the boundary and the backends that implement them. Adapters implement
//! these ports; exactly one adapter is bound per port per process.
//!
//! ## Capability Ports
//!
//! - `ClassificationService` - Ticket category prediction
//! - `ResolutionTimeService` - Time-to-resolution regression
//! - `SimilarityService` - Similar-ticket search
//! - `AutoResolutionService` - Grounded answer generation
//! - `ConversationService` - Conversation memory
//!
//! Every operation returns `Result<_, CapabilityError>`; failure is part of
//! the contract rather than an out-of-band signal.

mod auto_resolution;
mod classification;
mod conversation_memory;
mod resolution_time;
mod similarity;

pub use auto_resolution::AutoResolutionService;
pub use classification::ClassificationService;
pub use conversation_memory::ConversationService;
pub use resolution_time::ResolutionTimeService;
pub use similarity::SimilarityService;
