//! Backend event loop: async HTTP I/O on a dedicated thread.
//!
//! The UI never blocks on the network. It sends [`BackendAction`]s over a
//! crossbeam channel; this loop runs them against the Nova API on a Tokio
//! runtime and reports [`GuiEvent`]s back.

pub mod client;

pub use client::{ChatResponse, NovaApi};

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::protocol::{BackendAction, GuiEvent};

/// Run the backend event loop on a tokio runtime.
///
/// Returns when the action channel disconnects (the UI has shut down).
pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
    api_url: String,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(GuiEvent::RequestFailed(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let mut api = match NovaApi::new(&api_url) {
            Ok(api) => api,
            Err(e) => {
                let _ = event_tx.send(GuiEvent::RequestFailed(e));
                return;
            }
        };

        loop {
            // Drain actions from the UI (non-blocking)
            loop {
                match action_rx.try_recv() {
                    Ok(action) => handle_action(action, &mut api, &event_tx).await,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => return,
                }
            }

            // Idle until the next poll
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    });
}

/// Execute one action against the API and report the outcome.
async fn handle_action(action: BackendAction, api: &mut NovaApi, event_tx: &Sender<GuiEvent>) {
    match action {
        BackendAction::SendMessage {
            text,
            conversation_id,
        } => match api.send_message(&text, conversation_id.as_deref()).await {
            Ok(reply) => {
                let _ = event_tx.send(GuiEvent::ReplyReceived {
                    response: reply.response,
                    conversation_id: reply.conversation_id,
                });
            }
            Err(e) => {
                let _ = event_tx.send(GuiEvent::RequestFailed(e));
            }
        },

        BackendAction::FetchConversation(id) => match api.fetch_conversation(&id).await {
            Ok(history) => {
                let _ = event_tx.send(GuiEvent::HistoryLoaded {
                    conversation_id: id,
                    history,
                });
            }
            Err(e) => {
                let _ = event_tx.send(GuiEvent::RequestFailed(e));
            }
        },

        BackendAction::SetApiUrl(url) => {
            api.set_base_url(&url);
        }
    }
}
