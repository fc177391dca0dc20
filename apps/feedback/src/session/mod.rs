//! Session Driver: one conversation with the remote model.
//!
//! Flow: seed transcript + new user turn → `ModelBackend::generate` →
//!       append both turns to history → return the cleaned reply.
//!
//! `send` takes `&mut self`, so a session never has two submissions in flight
//! and turn order on the wire always matches submission order.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{
    clean_response, Content, GenerateRequest, GenerationConfig, ModelBackend, SafetyPolicy,
};

pub mod transcript;

pub use transcript::{ConversationTurn, Role, SeedTranscript};

/// Everything a session needs besides the backend. Fixed for the session's lifetime.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub model: String,
    pub generation: GenerationConfig,
    pub safety: SafetyPolicy,
    pub seed: SeedTranscript,
}

pub struct ChatSession {
    id: Uuid,
    backend: Arc<dyn ModelBackend>,
    model: String,
    generation: GenerationConfig,
    safety: SafetyPolicy,
    history: Vec<ConversationTurn>,
}

impl ChatSession {
    pub fn new(backend: Arc<dyn ModelBackend>, config: SessionConfig) -> Self {
        let id = Uuid::new_v4();
        info!(
            "Session {} opened (model: {}, seed turns: {})",
            id,
            config.model,
            config.seed.len()
        );

        Self {
            id,
            backend,
            model: config.model,
            generation: config.generation,
            safety: config.safety,
            history: config.seed.turns().to_vec(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Seed turns followed by every completed exchange, raw model text included.
    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    /// Sends `prompt` as the next user turn and returns the cleaned reply.
    ///
    /// On failure the history is left untouched.
    pub async fn send(&mut self, prompt: &str) -> Result<String, AppError> {
        let user_turn = ConversationTurn::user(prompt);
        let request = self.build_request(&user_turn);

        debug!(
            "Session {} submitting turn {} ({} chars)",
            self.id,
            self.history.len(),
            prompt.len()
        );

        let response = self.backend.generate(&self.model, &request).await?;
        let raw = response.text()?;

        self.history.push(user_turn);
        self.history.push(ConversationTurn::model(raw.as_str()));

        info!(
            "Session {} received reply ({} chars, history now {} turns)",
            self.id,
            raw.len(),
            self.history.len()
        );

        Ok(clean_response(&raw))
    }

    /// Submits prompts one after another, awaiting each reply before the next.
    /// Stops at the first failure.
    pub async fn send_all<I, S>(&mut self, prompts: I) -> Result<Vec<String>, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut replies = Vec::new();
        for prompt in prompts {
            replies.push(self.send(prompt.as_ref()).await?);
        }
        Ok(replies)
    }

    fn build_request(&self, next: &ConversationTurn) -> GenerateRequest {
        GenerateRequest {
            contents: self
                .history
                .iter()
                .chain(std::iter::once(next))
                .map(Content::from)
                .collect(),
            generation_config: self.generation,
            safety_settings: self.safety.clone(),
        }
    }
}
