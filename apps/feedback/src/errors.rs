use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Every variant is surfaced to the process boundary; nothing here is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid transcript: {0}")]
    InvalidTranscript(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Remote generation failed: {0}")]
    RemoteGeneration(#[from] LlmError),
}
