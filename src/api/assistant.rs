use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::assistant::WELCOME;

#[derive(Debug, Deserialize)]
pub struct PromptPayload {
    pub prompt: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "pt".to_string()
}

#[derive(Debug, Deserialize)]
pub struct LearnPayload {
    pub new_info: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub status: &'static str,
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct LearnResponse {
    pub status: &'static str,
    pub message: String,
}

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": WELCOME }))
}

pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<PromptPayload>,
) -> Json<GenerateResponse> {
    let assistant = state.assistant.read().await;
    Json(GenerateResponse {
        status: "success",
        response: assistant.generate(&payload.prompt, &payload.language),
    })
}

pub async fn learn(
    State(state): State<AppState>,
    Json(payload): Json<LearnPayload>,
) -> Json<LearnResponse> {
    let mut assistant = state.assistant.write().await;
    Json(LearnResponse {
        status: "success",
        message: assistant.learn(&payload.new_info),
    })
}
