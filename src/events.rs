//! Backend event processing (assistant replies, failures, history loads).

use crossbeam_channel::Receiver;
use std::time::Instant;

use crate::conversation::Role;
use crate::protocol::GuiEvent;
use crate::state::{ClientState, REQUEST_ERROR_MESSAGE};

/// Process all pending events from the backend.
pub fn process_events(event_rx: &Receiver<GuiEvent>, state: &mut ClientState) {
    // Drain all pending events from the backend
    while let Ok(event) = event_rx.try_recv() {
        match event {
            GuiEvent::ReplyReceived {
                response,
                conversation_id,
            } => {
                state.awaiting_reply = false;
                state.conversation.conversation_id = Some(conversation_id);
                state.push_message(Role::Assistant, response);
            }

            GuiEvent::RequestFailed(reason) => {
                state.awaiting_reply = false;
                state.log_system(format!("⚠ {}", reason));
                state
                    .status_messages
                    .push(("Falha na requisição".into(), Instant::now()));
                // The user sees the product's generic error bubble; the
                // technical reason stays in the system log.
                state.push_message(Role::Assistant, REQUEST_ERROR_MESSAGE.to_string());
            }

            GuiEvent::HistoryLoaded {
                conversation_id,
                history,
            } => {
                state.conversation.load_history(conversation_id, &history);
                state
                    .status_messages
                    .push(("Conversa restaurada".into(), Instant::now()));
            }
        }
    }
}
