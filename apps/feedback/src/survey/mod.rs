// Feedback survey question generation.
// Prompt building and seeding only; all model traffic goes through session + llm_client.

pub mod models;
pub mod prompts;
pub mod seed;
pub mod template;

pub use models::{parse_questions, FeedbackRequestSpec, QuestionSet, SurveyQuestion};
pub use template::{
    build_more_questions_prompt, build_more_questions_prompt_for, build_questions_prompt,
};
