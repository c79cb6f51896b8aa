//! TicketCategory value object.
//!
//! Categories are only produced by a classification backend. There is no
//! parser from client text.

use serde::Serialize;
use std::fmt;

/// Category assigned to a ticket by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Authentication,
    Billing,
    Performance,
    Usability,
    Other,
}

impl TicketCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Authentication => "authentication",
            TicketCategory::Billing => "billing",
            TicketCategory::Performance => "performance",
            TicketCategory::Usability => "usability",
            TicketCategory::Other => "other",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
