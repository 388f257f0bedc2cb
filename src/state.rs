//! Core application state, separated from UI logic.
//!
//! `ClientState` holds all data that represents the chat session:
//! the transcript, the server conversation id, request status, etc.
//! UI components receive state as a parameter rather than owning it.

use std::time::Instant;

use chrono::Local;

use crate::conversation::{ChatMessage, Conversation, Role};
use crate::logging::Logger;

/// Greeting seeded into a fresh conversation, matching the assistant's
/// opening line on the product.
pub const GREETING: &str =
    "Olá! Sou o Nova, seu assistente para FICO Blaze Advisor. Como posso ajudar você hoje?";

/// Error bubble shown when a request to the API fails.
pub const REQUEST_ERROR_MESSAGE: &str =
    "Desculpe, ocorreu um erro ao processar sua mensagem. Por favor, tente novamente.";

/// Core application state for the Nova client.
#[derive(Default)]
pub struct ClientState {
    /// The active conversation transcript.
    pub conversation: Conversation,

    /// True between sending a message and receiving the reply (or error).
    pub awaiting_reply: bool,

    /// Diagnostic log lines (request failures, backend notices).
    pub system_log: Vec<String>,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,

    /// Transcript logger for persisting chat turns to disk.
    pub logger: Option<Logger>,
}

impl ClientState {
    pub fn new() -> Self {
        Self {
            conversation: Conversation::new(),
            awaiting_reply: false,
            system_log: Vec::new(),
            status_messages: Vec::new(),
            logger: Logger::new().ok(),
        }
    }

    /// Current wall-clock display timestamp ("HH:MM").
    pub fn now_timestamp() -> String {
        Local::now().format("%H:%M").to_string()
    }

    /// Append a message to the transcript and persist it.
    pub fn push_message(&mut self, role: Role, content: String) {
        let msg = ChatMessage::new(role, content, Self::now_timestamp());
        if let Some(logger) = &self.logger {
            logger.log(crate::logging::LogEntry {
                conversation: self
                    .conversation
                    .conversation_id
                    .clone()
                    .unwrap_or_else(|| "unassigned".into()),
                timestamp: Local::now().format("%H:%M:%S").to_string(),
                sender: role.label().to_string(),
                message: msg.content.clone(),
            });
        }
        self.conversation.push(msg);
    }

    /// Seed the assistant greeting into an empty transcript.
    pub fn seed_greeting(&mut self) {
        if self.conversation.messages.is_empty() {
            self.push_message(Role::Assistant, GREETING.to_string());
        }
    }

    /// Reset to a fresh conversation.
    pub fn new_conversation(&mut self) {
        self.conversation.reset();
        self.awaiting_reply = false;
        self.seed_greeting();
    }

    /// Record a diagnostic line in the system log.
    pub fn log_system(&mut self, line: String) {
        self.system_log
            .push(format!("[{}] {}", Local::now().format("%H:%M:%S"), line));
        // Keep log from growing too large
        if self.system_log.len() > 500 {
            self.system_log.remove(0);
        }
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = ClientState::new();
        assert!(!state.awaiting_reply);
        assert!(state.conversation.messages.is_empty());
        assert!(state.conversation.conversation_id.is_none());
    }

    #[test]
    fn test_seed_greeting_only_once() {
        let mut state = ClientState::new();
        state.seed_greeting();
        state.seed_greeting();
        assert_eq!(state.conversation.messages.len(), 1);
        assert_eq!(state.conversation.messages[0].role, Role::Assistant);
        assert_eq!(state.conversation.messages[0].content, GREETING);
    }

    #[test]
    fn test_new_conversation_resets_and_greets() {
        let mut state = ClientState::new();
        state.seed_greeting();
        state.push_message(Role::User, "pergunta".into());
        state.conversation.conversation_id = Some("9".into());
        state.awaiting_reply = true;

        state.new_conversation();
        assert_eq!(state.conversation.messages.len(), 1);
        assert!(state.conversation.conversation_id.is_none());
        assert!(!state.awaiting_reply);
    }

    #[test]
    fn test_system_log_is_capped() {
        let mut state = ClientState::new();
        for i in 0..600 {
            state.log_system(format!("line {}", i));
        }
        assert!(state.system_log.len() <= 500);
        assert!(state.system_log.last().unwrap().contains("line 599"));
    }
}
