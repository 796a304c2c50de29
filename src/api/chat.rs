use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::chat::ChatMessage;

#[derive(Debug, Deserialize)]
pub struct ChatSendRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatSendResponse {
    pub messages: Vec<ChatMessage>,
}

/// Relay one chat message. Holds no market lock while waiting on the assistant.
pub async fn send(
    State(state): State<AppState>,
    Json(req): Json<ChatSendRequest>,
) -> Json<ChatSendResponse> {
    let messages = state.relay.send(&req.text).await;
    Json(ChatSendResponse { messages })
}
