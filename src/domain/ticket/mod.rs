//! Ticket module - the ticket entity, its value objects, and capability outcomes.

mod category;
mod entity;
mod outcomes;
mod priority;

pub use category::TicketCategory;
pub use entity::Ticket;
pub use outcomes::{
    rank_similar, AutoResolutionOutcome, ClassificationOutcome, ResolutionTimeOutcome,
    SimilarTicket,
};
pub use priority::TicketPriority;
