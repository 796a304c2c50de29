//! reqwest client for the assistant's `/generate` endpoint.

use super::{ChatBackend, ChatError, ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

pub const DEFAULT_CHAT_URL: &str = "http://127.0.0.1:8000/generate";

/// Posts each prompt once. No timeout, no retry, no backoff.
///
/// The body is parsed as JSON whatever the HTTP status, so an error payload
/// from the assistant surfaces as a non-success `ChatResponse`.
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    client: Client,
    url: String,
}

impl HttpChatBackend {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        debug!(url = %self.url, prompt = %request.prompt, "sending chat prompt");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        debug!(status = status.as_u16(), "chat response received");
        Ok(ChatResponse::from_json(&body))
    }
}
