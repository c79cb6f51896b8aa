//! Ticket capability handlers.

mod auto_resolve_ticket;
mod classify_ticket;
mod estimate_resolution_time;
mod find_similar_tickets;

pub use auto_resolve_ticket::{AutoResolveTicketHandler, AutoResolveTicketQuery};
pub use classify_ticket::{ClassifyTicketCommand, ClassifyTicketHandler};
pub use estimate_resolution_time::{EstimateResolutionTimeHandler, EstimateResolutionTimeQuery};
pub use find_similar_tickets::{FindSimilarTicketsHandler, FindSimilarTicketsQuery};
