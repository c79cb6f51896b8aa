//! HTTP adapters - the service boundary.
//!
//! Each capability area has its own HTTP adapter; `router` assembles them.

pub mod conversation;
pub mod error;
pub mod extract;
pub mod mapping;
pub mod middleware;
pub mod router;
pub mod ticket;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_routes, build_router, cors_layer};
