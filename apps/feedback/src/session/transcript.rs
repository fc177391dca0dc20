use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::Content;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One message in a conversation, attributed to the caller or the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

impl From<&ConversationTurn> for Content {
    fn from(turn: &ConversationTurn) -> Self {
        Content::text(turn.role.as_str(), turn.text.clone())
    }
}

/// Example turns replayed verbatim at the start of a session.
///
/// Always starts with a user turn, strictly alternates, and ends with a model
/// turn, so the next submitted prompt reads as a fresh user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedTranscript {
    turns: Vec<ConversationTurn>,
}

impl SeedTranscript {
    pub fn new(turns: Vec<ConversationTurn>) -> Result<Self, AppError> {
        validate_turns(&turns)?;
        Ok(Self { turns })
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

fn validate_turns(turns: &[ConversationTurn]) -> Result<(), AppError> {
    let first = turns
        .first()
        .ok_or_else(|| AppError::InvalidTranscript("transcript is empty".to_string()))?;
    if first.role != Role::User {
        return Err(AppError::InvalidTranscript(
            "transcript must start with a user turn".to_string(),
        ));
    }

    if let Some(index) = turns.windows(2).position(|pair| pair[0].role == pair[1].role) {
        return Err(AppError::InvalidTranscript(format!(
            "turns {} and {} are both {} turns",
            index,
            index + 1,
            turns[index].role.as_str()
        )));
    }

    // Alternation from a user start means the last role is decided by parity.
    if turns.len() % 2 != 0 {
        return Err(AppError::InvalidTranscript(
            "transcript must end with a model turn".to_string(),
        ));
    }

    Ok(())
}
