//! Domain layer containing the ticket vocabulary and capability outcomes.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (timestamps, bounded scores, capability ids, errors)
//! - `ticket` - Ticket entity, priority/category value objects, outcome records
//! - `conversation` - Conversation turns for ticket threads

pub mod conversation;
pub mod foundation;
pub mod ticket;
