//! Mock chat backend for testing without network calls.

use std::sync::Mutex;

use super::{ChatBackend, ChatError, ChatRequest, ChatResponse};
use async_trait::async_trait;

/// Returns a canned result and remembers every request it saw.
#[derive(Debug)]
pub struct MockChatBackend {
    result: Result<ChatResponse, ChatError>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockChatBackend {
    /// Answer every prompt with `{status: "success", response: text}`.
    pub fn answering(text: &str) -> Self {
        Self::with_response(ChatResponse {
            status: Some("success".to_string()),
            response: Some(text.to_string()),
        })
    }

    pub fn with_response(response: ChatResponse) -> Self {
        Self {
            result: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ChatError) -> Self {
        Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatBackend for MockChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.result.clone()
    }
}
