//! Prompt Template Builder: turns a `FeedbackRequestSpec` into instruction text.
//!
//! Field values never get spliced into free text. They are serialized as one JSON
//! object inside a marked block, so quotes, newlines, or instruction-like text in
//! a field stay inside their string value. Pure: same spec, same bytes.

use serde::Serialize;

use crate::errors::AppError;
use crate::survey::models::{FeedbackRequestSpec, DEFAULT_QUESTION_COUNT};
use crate::survey::prompts::{MORE_QUESTIONS_PROMPT_TEMPLATE, QUESTIONS_PROMPT_TEMPLATE};

/// Field names match the ones the seeded example teaches the model.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptPayload<'a> {
    feedback_topic: &'a str,
    feedback_context: &'a str,
    feedback_area: &'a [String],
    question_types: &'a [String],
    target_reviewer: &'a str,
    total_questions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    lang: Option<&'a str>,
}

/// Builds the question-design request for `spec`.
///
/// Fails with `MissingField` if topic, context or reviewer is blank, if there
/// are no non-blank areas or question types, or if the question count is zero.
pub fn build_questions_prompt(spec: &FeedbackRequestSpec) -> Result<String, AppError> {
    require_text(&spec.topic, "topic")?;
    require_text(&spec.context, "context")?;
    require_text(&spec.reviewer, "reviewer")?;
    require_entries(&spec.areas, "areas")?;
    require_entries(&spec.question_types, "question_types")?;
    if spec.question_count == 0 {
        return Err(AppError::MissingField("question_count"));
    }

    let payload = PromptPayload {
        feedback_topic: &spec.topic,
        feedback_context: &spec.context,
        feedback_area: &spec.areas,
        question_types: &spec.question_types,
        target_reviewer: &spec.reviewer,
        total_questions: spec.question_count,
        lang: spec.lang.as_deref(),
    };
    let request_json = serde_json::to_string_pretty(&payload)?;

    Ok(QUESTIONS_PROMPT_TEMPLATE.replace("{request_json}", &request_json))
}

/// The fixed follow-up asking for five more distinct questions.
pub fn build_more_questions_prompt() -> String {
    build_more_questions_prompt_for(DEFAULT_QUESTION_COUNT)
}

pub fn build_more_questions_prompt_for(count: u32) -> String {
    MORE_QUESTIONS_PROMPT_TEMPLATE.replace("{count}", &count.to_string())
}

fn require_text(value: &str, field: &'static str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(())
}

fn require_entries(values: &[String], field: &'static str) -> Result<(), AppError> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(AppError::MissingField(field));
    }
    Ok(())
}
