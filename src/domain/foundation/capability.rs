//! Capability identifiers.
//!
//! Each capability is one abstract service contract with exactly one bound
//! implementation per process.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five capabilities exposed through the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Classification,
    ResolutionTime,
    Similarity,
    AutoResolution,
    Conversation,
}

impl Capability {
    /// Every capability, in registry order.
    pub const ALL: [Capability; 5] = [
        Capability::Classification,
        Capability::ResolutionTime,
        Capability::Similarity,
        Capability::AutoResolution,
        Capability::Conversation,
    ];

    /// Human-facing name used in operator messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Capability::Classification => "Classification",
            Capability::ResolutionTime => "Resolution time",
            Capability::Similarity => "Similarity",
            Capability::AutoResolution => "Auto-resolution",
            Capability::Conversation => "Conversation",
        }
    }

    /// Configuration key for this capability.
    pub fn key(&self) -> &'static str {
        match self {
            Capability::Classification => "classification",
            Capability::ResolutionTime => "resolution_time",
            Capability::Similarity => "similarity",
            Capability::AutoResolution => "auto_resolution",
            Capability::Conversation => "conversation",
        }
    }

    /// Message reported by every operation of an unbound capability.
    pub fn not_configured_message(&self) -> String {
        format!("{} service is not yet configured.", self.display_name())
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_messages_match_operator_wording() {
        assert_eq!(
            Capability::Classification.not_configured_message(),
            "Classification service is not yet configured."
        );
        assert_eq!(
            Capability::ResolutionTime.not_configured_message(),
            "Resolution time service is not yet configured."
        );
        assert_eq!(
            Capability::Similarity.not_configured_message(),
            "Similarity service is not yet configured."
        );
        assert_eq!(
            Capability::AutoResolution.not_configured_message(),
            "Auto-resolution service is not yet configured."
        );
        assert_eq!(
            Capability::Conversation.not_configured_message(),
            "Conversation service is not yet configured."
        );
    }

    #[test]
    fn keys_are_snake_case() {
        let keys: Vec<_> = Capability::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec!["classification", "resolution_time", "similarity", "auto_resolution", "conversation"]
        );
    }
}
