//! Request mapping from HTTP payloads to domain values.
//!
//! Both functions are pure: the caller supplies the receive time used when
//! the payload carries no `created_at`.

use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::ticket::{Ticket, TicketPriority};

use super::conversation::ConversationTurnRequest;
use super::ticket::TicketRequest;

/// Builds the domain ticket for a request.
///
/// Missing `ticket_id` becomes `""`, missing `created_at` becomes
/// `received_at`, and any priority that is not a known label becomes medium.
/// The category is never taken from the request.
///
/// # Errors
///
/// Returns `EmptyField("ticket_text")` when the text is empty.
pub fn ticket_from_request(
    request: &TicketRequest,
    received_at: Timestamp,
) -> Result<Ticket, ValidationError> {
    let created_at = request
        .created_at
        .map(Timestamp::from_datetime)
        .unwrap_or(received_at);

    let ticket = Ticket::new(request.ticket_text.clone())?
        .with_id(request.ticket_id.clone().unwrap_or_default())
        .with_customer_id(request.customer_id.clone())
        .with_created_at(created_at)
        .with_priority(TicketPriority::normalize(request.priority.as_deref()));

    Ok(ticket)
}

/// Builds the domain turn for an append request.
///
/// # Errors
///
/// Returns `EmptyField` when `ticket_id` or `user_message` is empty.
pub fn turn_from_request(
    request: &ConversationTurnRequest,
    received_at: Timestamp,
) -> Result<ConversationTurn, ValidationError> {
    let created_at = request
        .created_at
        .map(Timestamp::from_datetime)
        .unwrap_or(received_at);

    let turn = ConversationTurn::new(request.ticket_id.clone(), request.user_message.clone())?
        .with_assistant_message(request.assistant_message.clone())
        .with_created_at(created_at);

    Ok(turn)
}
