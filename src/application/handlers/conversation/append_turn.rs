//! AppendTurnHandler - Command handler for recording a conversation turn.

use std::sync::Arc;

use crate::domain::conversation::ConversationTurn;
use crate::domain::foundation::CapabilityError;
use crate::ports::ConversationService;

/// Command to append a turn to its thread.
#[derive(Debug, Clone)]
pub struct AppendTurnCommand {
    pub turn: ConversationTurn,
}

pub struct AppendTurnHandler {
    memory: Arc<dyn ConversationService>,
}

impl AppendTurnHandler {
    pub fn new(memory: Arc<dyn ConversationService>) -> Self {
        Self { memory }
    }

    pub async fn handle(&self, cmd: AppendTurnCommand) -> Result<(), CapabilityError> {
        let ticket_id = cmd.turn.ticket_id().to_string();
        self.memory.append_turn(cmd.turn).await?;

        tracing::debug!(ticket_id = %ticket_id, "conversation_turn_appended");
        Ok(())
    }
}
