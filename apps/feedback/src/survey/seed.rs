//! Conversation seeds for the survey flows.
//!
//! The feedback-expert seed is two-shot priming: a role exchange, one worked
//! question request with its structured reply, then one "generate more"
//! exchange. The model picks up the reply shape without a formal schema.

use crate::errors::AppError;
use crate::session::{ConversationTurn, SeedTranscript};
use crate::survey::models::FeedbackRequestSpec;
use crate::survey::prompts::{
    EXAMPLE_MORE_QUESTIONS_REPLY, EXAMPLE_QUESTIONS_REPLY, ROLE_ACKNOWLEDGEMENT,
    ROLE_INSTRUCTION,
};
use crate::survey::template::{build_more_questions_prompt, build_questions_prompt};

/// The worked example request embedded in the feedback-expert seed.
pub fn example_request() -> FeedbackRequestSpec {
    FeedbackRequestSpec::new(
        "Online Coaching",
        "I've arranged online coaching to my students yesterday. I want to ask feedback from them.",
        ["quality", "time", "content", "engaging", "practical"],
        "students",
    )
    .with_question_types(["scale", "choices", "text"])
    .with_question_count(5)
}

impl SeedTranscript {
    /// Role exchange only.
    pub fn greeting() -> Result<Self, AppError> {
        SeedTranscript::new(role_exchange())
    }

    /// Role exchange plus the worked request and follow-up examples.
    pub fn feedback_expert() -> Result<Self, AppError> {
        let mut turns = role_exchange();
        turns.push(ConversationTurn::user(build_questions_prompt(
            &example_request(),
        )?));
        turns.push(ConversationTurn::model(EXAMPLE_QUESTIONS_REPLY));
        turns.push(ConversationTurn::user(build_more_questions_prompt()));
        turns.push(ConversationTurn::model(EXAMPLE_MORE_QUESTIONS_REPLY));
        SeedTranscript::new(turns)
    }
}

fn role_exchange() -> Vec<ConversationTurn> {
    vec![
        ConversationTurn::user(ROLE_INSTRUCTION),
        ConversationTurn::model(ROLE_ACKNOWLEDGEMENT),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use crate::survey::models::parse_questions;

    fn assert_alternates_user_first(seed: &SeedTranscript) {
        let turns = seed.turns();
        assert_eq!(turns.first().unwrap().role, Role::User);
        assert_eq!(turns.last().unwrap().role, Role::Model);
        for pair in turns.windows(2) {
            assert_ne!(pair[0].role, pair[1].role);
        }
    }

    #[test]
    fn test_feedback_expert_shape() {
        let seed = SeedTranscript::feedback_expert().unwrap();
        assert_eq!(seed.len(), 6);
        assert_alternates_user_first(&seed);
        // Seed plus the next prompt is an odd-length exchange ending on a user turn.
        assert_eq!((seed.len() + 1) % 2, 1);
    }

    #[test]
    fn test_greeting_shape() {
        let seed = SeedTranscript::greeting().unwrap();
        assert_eq!(seed.len(), 2);
        assert_alternates_user_first(&seed);
        assert_eq!(seed.turns()[0].text, ROLE_INSTRUCTION);
    }

    #[test]
    fn test_feedback_expert_embeds_example_request_and_follow_up() {
        let seed = SeedTranscript::feedback_expert().unwrap();
        let turns = seed.turns();
        assert!(turns[2].text.contains("Online Coaching"));
        assert!(turns[2].text.contains("practical"));
        assert_eq!(turns[4].text, "Generate 5 more different questions");
    }

    #[test]
    fn test_seeded_replies_parse_as_question_sets() {
        let first = parse_questions(EXAMPLE_QUESTIONS_REPLY).unwrap();
        assert_eq!(first.questions.len(), 2);

        let more = parse_questions(EXAMPLE_MORE_QUESTIONS_REPLY).unwrap();
        assert_eq!(more.questions.len(), 5);
        for question in &more.questions {
            assert!(["scale", "choices", "text"].contains(&question.question_type.as_str()));
            assert!(example_request().areas.contains(&question.area));
        }
    }

    #[test]
    fn test_seed_is_identical_across_builds() {
        assert_eq!(
            SeedTranscript::feedback_expert().unwrap(),
            SeedTranscript::feedback_expert().unwrap()
        );
    }
}
