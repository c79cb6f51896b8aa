//! Application handlers.
//!
//! Command and query handlers that invoke the bound capabilities.

pub mod conversation;
pub mod ticket;

pub use conversation::{AppendTurnCommand, AppendTurnHandler, GetHistoryHandler, GetHistoryQuery};
pub use ticket::{
    AutoResolveTicketHandler, AutoResolveTicketQuery, ClassifyTicketCommand,
    ClassifyTicketHandler, EstimateResolutionTimeHandler,
    EstimateResolutionTimeQuery, FindSimilarTicketsHandler, FindSimilarTicketsQuery,
};
