use std::sync::Arc;

use serde::Serialize;

use super::{process_prompt, ChatBackend, ChatRequest};

pub const INVALID_PROMPT_MESSAGE: &str = "Por favor, digite uma pergunta válida.";
pub const BAD_RESPONSE_MESSAGE: &str =
    "Desculpe, ocorreu um erro ao processar sua solicitação ou a resposta está vazia.";
pub const UNREACHABLE_MESSAGE: &str =
    "Não foi possível conectar à Aurora AI. Por favor, verifique se a API está rodando no terminal.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    fn user(text: &str) -> Self {
        Self {
            sender: Sender::User,
            text: text.to_string(),
        }
    }

    fn ai(text: &str) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.to_string(),
        }
    }
}

/// Turns one user message into the messages the chat window appends.
#[derive(Debug, Clone)]
pub struct ChatRelay {
    backend: Arc<dyn ChatBackend>,
}

impl ChatRelay {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    /// Echo the user's text and append the assistant's reply or a fallback.
    ///
    /// Blank input yields no messages. A prompt that is empty after stop-word
    /// removal is answered locally without calling the backend.
    pub async fn send(&self, text: &str) -> Vec<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let reply = self.reply(text).await;
        vec![ChatMessage::user(text), ChatMessage::ai(&reply)]
    }

    async fn reply(&self, text: &str) -> String {
        let prompt = process_prompt(text);
        if prompt.is_empty() {
            return INVALID_PROMPT_MESSAGE.to_string();
        }

        match self.backend.send(&ChatRequest::pt(prompt)).await {
            Ok(response) => match response.answer() {
                Some(answer) => answer.to_string(),
                None => BAD_RESPONSE_MESSAGE.to_string(),
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to reach chat assistant");
                UNREACHABLE_MESSAGE.to_string()
            }
        }
    }
}
