//! TicketPriority value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Priority of a support ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    /// Canonical lower-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Critical => "critical",
        }
    }

    /// Lenient conversion for client-supplied priorities.
    ///
    /// Absent or unrecognised input falls back to [`TicketPriority::Medium`];
    /// this never fails.
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for TicketPriority {
    type Err = ValidationError;

    /// Strict, case-insensitive parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            "critical" => Ok(TicketPriority::Critical),
            _ => Err(ValidationError::invalid_format(
                "priority",
                format!("expected one of low, medium, high, critical; got '{}'", s),
            )),
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_medium() {
        assert_eq!(TicketPriority::default(), TicketPriority::Medium);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("HIGH".parse::<TicketPriority>().unwrap(), TicketPriority::High);
        assert_eq!("Critical".parse::<TicketPriority>().unwrap(), TicketPriority::Critical);
        assert_eq!("low".parse::<TicketPriority>().unwrap(), TicketPriority::Low);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        let err = "urgent".parse::<TicketPriority>().unwrap_err();
        assert_eq!(err.field(), "priority");
    }

    #[test]
    fn normalize_falls_back_to_medium() {
        assert_eq!(TicketPriority::normalize(None), TicketPriority::Medium);
        assert_eq!(TicketPriority::normalize(Some("")), TicketPriority::Medium);
        assert_eq!(TicketPriority::normalize(Some("urgent")), TicketPriority::Medium);
        assert_eq!(TicketPriority::normalize(Some(" high ")), TicketPriority::Medium);
        assert_eq!(TicketPriority::normalize(Some("HiGh")), TicketPriority::High);
    }

    #[test]
    fn serializes_to_lowercase_json() {
        assert_eq!(
            serde_json::to_string(&TicketPriority::Critical).unwrap(),
            "\"critical\""
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const KNOWN: [&str; 4] = ["low", "medium", "high", "critical"];

    proptest! {
        /// Property: anything that is not a known label (ignoring case) normalizes to medium
        #[test]
        fn unknown_input_normalizes_to_medium(raw in "\\PC{0,16}") {
            prop_assume!(!KNOWN.contains(&raw.to_lowercase().as_str()));
            prop_assert_eq!(TicketPriority::normalize(Some(&raw)), TicketPriority::Medium);
        }

        /// Property: known labels survive any casing
        #[test]
        fn known_labels_survive_any_casing(index in 0usize..4, mask in any::<u16>()) {
            let label = KNOWN[index];
            let cased: String = label
                .chars()
                .enumerate()
                .map(|(i, c)| if mask & (1 << (i % 16)) != 0 { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert_eq!(TicketPriority::normalize(Some(&cased)).as_str(), label);
        }
    }
}
