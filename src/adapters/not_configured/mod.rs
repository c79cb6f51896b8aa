//! Default capability bindings that report "not configured".

mod services;

pub use services::{
    NotConfiguredAutoResolution, NotConfiguredClassification, NotConfiguredConversation,
    NotConfiguredResolutionTime, NotConfiguredSimilarity,
};
