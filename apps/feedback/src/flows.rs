//! The two end-to-end flows behind the binaries.
//!
//! Each takes an already-loaded `Config`, so credential checks happen before
//! any client is built and the flows can be pointed at a mock server.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{GeminiClient, GenerationConfig, SafetyPolicy};
use crate::session::{ChatSession, SeedTranscript, SessionConfig};
use crate::survey::prompts::CUSTOMER_FEEDBACK_PROMPT;
use crate::survey::{
    build_more_questions_prompt, build_questions_prompt, parse_questions, FeedbackRequestSpec,
};

/// The request the question flow asks about.
pub fn delivery_request() -> FeedbackRequestSpec {
    FeedbackRequestSpec::new(
        "Software project delivery",
        "I have submitted my work to my client. I want to gather feedback from them.",
        ["Quality", "Speed", "Price"],
        "the client",
    )
}

/// One templated question request followed by two follow-ups, each awaited
/// before the next goes out. Returns the cleaned replies in order.
pub async fn run_questions(config: &Config) -> Result<Vec<String>, AppError> {
    let mut session = open_session(config, SeedTranscript::feedback_expert()?)?;

    let prompts = [
        build_questions_prompt(&delivery_request())?,
        build_more_questions_prompt(),
        build_more_questions_prompt(),
    ];

    let mut replies = Vec::with_capacity(prompts.len());
    for prompt in &prompts {
        let reply = session.send(prompt).await?;
        match parse_questions(&reply) {
            Ok(set) => info!("Reply contained {} questions", set.questions.len()),
            Err(e) => warn!("Reply is not a question set: {e}"),
        }
        replies.push(reply);
    }

    Ok(replies)
}

/// Greeting seed plus the customer-feedback prompt. Returns the cleaned reply.
pub async fn run_chat(config: &Config) -> Result<String, AppError> {
    let mut session = open_session(config, SeedTranscript::greeting()?)?;
    session.send(CUSTOMER_FEEDBACK_PROMPT).await
}

fn open_session(config: &Config, seed: SeedTranscript) -> Result<ChatSession, AppError> {
    let client = GeminiClient::new(config.api_key.clone())?.with_api_base(&config.api_base);
    info!("LLM client initialized (model: {})", config.model);

    Ok(ChatSession::new(
        Arc::new(client),
        SessionConfig {
            model: config.model.clone(),
            generation: GenerationConfig::default(),
            safety: SafetyPolicy::default(),
            seed,
        },
    ))
}
