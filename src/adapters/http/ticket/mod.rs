//! HTTP adapter for the ticket capability endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AutoResolutionResponse, ClassificationResponse, ResolutionTimeResponse, SimilarTicketResponse,
    SimilarityParams, SimilarityResponse, TicketRequest,
};
pub use handlers::TicketHandlers;
pub use routes::ticket_routes;
