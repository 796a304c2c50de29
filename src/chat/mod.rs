//! Chat relay: cleans user text and forwards it to the assistant endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod http;
pub mod mock;
pub mod prompt;
pub mod relay;

pub use http::HttpChatBackend;
pub use mock::MockChatBackend;
pub use prompt::process_prompt;
pub use relay::{ChatMessage, ChatRelay, Sender};

/// Body sent to the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    pub language: String,
}

impl ChatRequest {
    /// Portuguese is the only language the site sends.
    pub fn pt(prompt: String) -> Self {
        Self {
            prompt,
            language: "pt".to_string(),
        }
    }
}

/// Whatever the assistant answered. Any JSON body parses; fields the
/// assistant did not send are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatResponse {
    pub status: Option<String>,
    pub response: Option<String>,
}

impl ChatResponse {
    pub fn from_json(value: &serde_json::Value) -> Self {
        let field = |name: &str| value.get(name).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            status: field("status"),
            response: field("response"),
        }
    }

    /// The answer text, if the assistant reported success with a non-empty answer.
    pub fn answer(&self) -> Option<&str> {
        match (self.status.as_deref(), self.response.as_deref()) {
            (Some("success"), Some(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Transport to the assistant. One request per call; no retries.
#[async_trait]
pub trait ChatBackend: Send + Sync + fmt::Debug {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;
}

#[derive(Debug, Clone, Error)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_requires_success_and_text() {
        let ok = ChatResponse::from_json(&serde_json::json!({"status": "success", "response": "oi"}));
        assert_eq!(ok.answer(), Some("oi"));

        let empty = ChatResponse::from_json(&serde_json::json!({"status": "success", "response": ""}));
        assert_eq!(empty.answer(), None);

        let detail = ChatResponse::from_json(&serde_json::json!({"detail": "boom"}));
        assert_eq!(detail.answer(), None);

        let array = ChatResponse::from_json(&serde_json::json!([1, 2]));
        assert_eq!(array, ChatResponse::default());
    }

    #[test]
    fn test_chat_error_display() {
        assert_eq!(
            ChatError::Network("refused".to_string()).to_string(),
            "Network error: refused"
        );
    }

    #[test]
    fn test_request_json() {
        let json = serde_json::to_value(ChatRequest::pt("blockchain".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"prompt": "blockchain", "language": "pt"}));
    }
}
