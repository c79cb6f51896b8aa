//! Mock Adapters
//!
//! Configurable capability bindings for tests and local development.

mod behavior;
mod services;

pub use services::{
    MockAutoResolution, MockClassification, MockConversation, MockResolutionTime, MockSimilarity,
};
