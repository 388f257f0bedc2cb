//! Conversation transcript model.
//!
//! A conversation is an append-only list of chat messages. Messages are
//! immutable once created; a reply is always a new message. The server
//! also returns history as flat `"Usuário: …"` / `"Nova: …"` lines, which
//! parse back into roles here.

use uuid::Uuid;

/// Maximum messages to keep in a transcript before trimming
const MAX_TRANSCRIPT_MESSAGES: usize = 2000;
/// Number of oldest messages to remove when trimming
const TRANSCRIPT_TRIM_COUNT: usize = 500;

/// History line prefix the server writes for user turns.
pub const HISTORY_USER_PREFIX: &str = "Usuário: ";
/// History line prefix the server writes for assistant turns.
pub const HISTORY_ASSISTANT_PREFIX: &str = "Nova: ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Sender label shown in the chat panel and transcript logs.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "Você",
            Role::Assistant => "Nova Assistant",
        }
    }
}

/// A single chat message.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Display timestamp ("HH:MM"); empty for history-loaded messages.
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: String, timestamp: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content,
            timestamp,
        }
    }
}

/// The active conversation transcript.
#[derive(Default)]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
    /// Server-assigned id; None until the first reply arrives.
    pub conversation_id: Option<String>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, msg: ChatMessage) {
        self.messages.push(msg);
        // Trim old messages if the transcript gets too large
        if self.messages.len() > MAX_TRANSCRIPT_MESSAGES {
            self.messages.drain(0..TRANSCRIPT_TRIM_COUNT);
        }
    }

    /// Replace the transcript with server-side history lines.
    pub fn load_history(&mut self, conversation_id: String, lines: &[String]) {
        self.messages = lines.iter().filter_map(|l| parse_history_line(l)).collect();
        self.conversation_id = Some(conversation_id);
    }

    /// Drop the transcript and server id to start a fresh conversation.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.conversation_id = None;
    }
}

/// Parse one server history line into a message.
///
/// Lines without a known role prefix are skipped; the server only ever
/// writes the two prefixes above, so anything else is noise.
pub fn parse_history_line(line: &str) -> Option<ChatMessage> {
    if let Some(content) = line.strip_prefix(HISTORY_USER_PREFIX) {
        Some(ChatMessage::new(Role::User, content.to_string(), String::new()))
    } else {
        line.strip_prefix(HISTORY_ASSISTANT_PREFIX).map(|content| {
            ChatMessage::new(Role::Assistant, content.to_string(), String::new())
        })
    }
}
