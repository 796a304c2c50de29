//! Local keyword-lookup assistant behind `/generate` and `/learn`.
//!
//! This is the endpoint the chat relay talks to by default. It is a fixed
//! lookup table with a memory of "learned" phrases, not a model.

pub mod knowledge;

pub use knowledge::KnowledgeBase;

pub const ALREADY_LEARNED: &str = "Já analisei essa informação. O que mais você precisa?";
pub const UNKNOWN_TOPIC: &str =
    "Processando... Meu conhecimento está sempre se expandindo para este tópico.";
pub const WELCOME: &str =
    "Bem-vindo à API de Simulação da Aurora AI! Acesse /docs para mais informações.";

#[derive(Debug, Clone, Default)]
pub struct Assistant {
    knowledge: KnowledgeBase,
    learned: Vec<String>,
}

impl Assistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&self, prompt: &str, language: &str) -> String {
        let prompt = prompt.trim().to_lowercase();

        if self.learned.iter().any(|info| *info == prompt) {
            return ALREADY_LEARNED.to_string();
        }

        self.knowledge
            .lookup(language, &prompt)
            .unwrap_or(UNKNOWN_TOPIC)
            .to_string()
    }

    pub fn learn(&mut self, new_info: &str) -> String {
        self.learned.push(new_info.to_lowercase());
        tracing::info!(learned = self.learned.len(), "assistant learned new information");
        format!(
            "Aurora AI incorporou a nova informação: '{}'. O modelo foi ajustado de forma incremental.",
            new_info
        )
    }
}
