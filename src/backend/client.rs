//! HTTP client for the Nova API.
//!
//! Wire format:
//! - `POST /api/chat` with `{message, conversation_id?}` returns
//!   `{response, conversation_id}`. The server assigns a conversation id
//!   on the first message and threads history through it afterwards.
//! - `GET /api/conversations/{id}` returns `{history}` as flat
//!   role-prefixed lines.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-request timeout. Assistant replies can take a while (retrieval +
/// model call on the server side), so this is generous.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize, Debug)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<&'a str>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_id: String,
}

#[derive(Deserialize, Debug)]
pub struct ConversationHistory {
    pub history: Vec<String>,
}

/// Thin wrapper over `reqwest` bound to one API base URL.
pub struct NovaApi {
    http: reqwest::Client,
    base_url: String,
}

impl NovaApi {
    pub fn new(base_url: &str) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = normalize_base_url(url);
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a chat message, threading the conversation id when present.
    pub async fn send_message(
        &self,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatResponse, String> {
        let url = format!("{}/api/chat", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&ChatRequest {
                message,
                conversation_id,
            })
            .send()
            .await
            .map_err(|e| format!("Request to {} failed: {}", url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("API returned {} for {}", status, url));
        }

        resp.json::<ChatResponse>()
            .await
            .map_err(|e| format!("Invalid chat response: {}", e))
    }

    /// Fetch the stored history of a conversation.
    pub async fn fetch_conversation(&self, conversation_id: &str) -> Result<Vec<String>, String> {
        let url = format!("{}/api/conversations/{}", self.base_url, conversation_id);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Request to {} failed: {}", url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("API returned {} for {}", status, url));
        }

        resp.json::<ConversationHistory>()
            .await
            .map(|c| c.history)
            .map_err(|e| format!("Invalid history response: {}", e))
    }
}

/// Trailing slashes would produce `//api/chat` when joined.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://localhost:8000"), "http://localhost:8000");
        assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base_url("https://nova.example.com///"), "https://nova.example.com");
    }

    #[test]
    fn test_chat_request_omits_missing_conversation_id() {
        let req = ChatRequest {
            message: "oi",
            conversation_id: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "oi" }));

        let req = ChatRequest {
            message: "oi",
            conversation_id: Some("3"),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "oi", "conversation_id": "3" })
        );
    }

    #[test]
    fn test_chat_response_decodes() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"response": "Olá!", "conversation_id": "1"}"#,
        )
        .unwrap();
        assert_eq!(resp.response, "Olá!");
        assert_eq!(resp.conversation_id, "1");
    }

    #[test]
    fn test_history_decodes() {
        let hist: ConversationHistory = serde_json::from_str(
            r#"{"history": ["Usuário: oi", "Nova: Olá!"]}"#,
        )
        .unwrap();
        assert_eq!(hist.history.len(), 2);
    }
}
