/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Send a chat message to the Nova API
    SendMessage {
        text: String,
        conversation_id: Option<String>,
    },
    /// Fetch the history of a stored conversation
    FetchConversation(String),
    /// Point the backend at a different API base URL
    SetApiUrl(String),
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The assistant replied to a chat message
    ReplyReceived {
        response: String,
        conversation_id: String,
    },
    /// A request failed (network error, bad status, decode error)
    RequestFailed(String),
    /// A conversation's history was fetched
    HistoryLoaded {
        conversation_id: String,
        history: Vec<String>,
    },
}
