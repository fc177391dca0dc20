use serde::{Deserialize, Serialize};

pub const DEFAULT_QUESTION_TYPES: [&str; 3] = ["scale", "choices", "text"];
pub const DEFAULT_QUESTION_COUNT: u32 = 5;

/// Describes the event that feedback questions should be designed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequestSpec {
    pub topic: String,
    pub context: String,
    pub areas: Vec<String>,
    pub reviewer: String,
    /// Ordered, duplicate-free.
    #[serde(default = "default_question_types")]
    pub question_types: Vec<String>,
    #[serde(default = "default_question_count")]
    pub question_count: u32,
    #[serde(default)]
    pub lang: Option<String>,
}

fn default_question_types() -> Vec<String> {
    DEFAULT_QUESTION_TYPES.iter().map(|t| t.to_string()).collect()
}

fn default_question_count() -> u32 {
    DEFAULT_QUESTION_COUNT
}

impl FeedbackRequestSpec {
    pub fn new<I, S>(
        topic: impl Into<String>,
        context: impl Into<String>,
        areas: I,
        reviewer: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topic: topic.into(),
            context: context.into(),
            areas: areas.into_iter().map(Into::into).collect(),
            reviewer: reviewer.into(),
            question_types: default_question_types(),
            question_count: DEFAULT_QUESTION_COUNT,
            lang: None,
        }
    }

    /// Replaces the question types, dropping repeats but keeping first-seen order.
    pub fn with_question_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for t in types.into_iter().map(Into::into) {
            if !unique.contains(&t) {
                unique.push(t);
            }
        }
        self.question_types = unique;
        self
    }

    pub fn with_question_count(mut self, count: u32) -> Self {
        self.question_count = count;
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// A choice value. Scale questions use numbers, choice questions may use text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

/// One survey question in the shape the seed transcript teaches the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyQuestion {
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_labels: Option<Vec<String>>,
    pub area: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<SurveyQuestion>,
}

/// Best-effort parse of a cleaned model reply. Callers only use the result for
/// reporting; the reply text itself is always what gets printed.
pub fn parse_questions(cleaned: &str) -> Result<QuestionSet, serde_json::Error> {
    serde_json::from_str(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let spec = FeedbackRequestSpec::new("Online Coaching", "ctx", ["quality"], "students");
        assert_eq!(spec.question_types, vec!["scale", "choices", "text"]);
        assert_eq!(spec.question_count, 5);
        assert!(spec.lang.is_none());
    }

    #[test]
    fn test_question_types_are_deduplicated_in_order() {
        let spec = FeedbackRequestSpec::new("t", "c", ["a"], "r")
            .with_question_types(["text", "scale", "text", "choices", "scale"]);
        assert_eq!(spec.question_types, vec!["text", "scale", "choices"]);
    }

    #[test]
    fn test_spec_deserializes_with_defaults() {
        let json = r#"{
            "topic": "Workshop",
            "context": "Half-day workshop",
            "areas": ["pace"],
            "reviewer": "attendees"
        }"#;
        let spec: FeedbackRequestSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.question_count, DEFAULT_QUESTION_COUNT);
        assert_eq!(spec.question_types.len(), 3);
    }

    #[test]
    fn test_parse_questions_accepts_scale_and_text() {
        let json = r#"{
            "questions": [
                {
                    "question": "How would you rate the session?",
                    "type": "scale",
                    "options": [1, 2, 3, 4, 5],
                    "optionLabels": ["Very poor", "Poor", "Neutral", "Good", "Excellent"],
                    "area": "quality"
                },
                {"question": "What did you like most?", "type": "text", "area": "content"}
            ]
        }"#;
        let set = parse_questions(json).unwrap();
        assert_eq!(set.questions.len(), 2);
        assert_eq!(set.questions[0].question_type, "scale");
        assert_eq!(set.questions[0].options.as_ref().unwrap()[4], OptionValue::Number(5));
        assert_eq!(set.questions[0].option_labels.as_ref().unwrap()[0], "Very poor");
        assert!(set.questions[1].options.is_none());
    }

    #[test]
    fn test_parse_questions_accepts_text_choices() {
        let json = r#"{"questions": [{
            "question": "Which format do you prefer?",
            "type": "choices",
            "options": ["Video", "In person"],
            "area": "format"
        }]}"#;
        let set = parse_questions(json).unwrap();
        assert_eq!(
            set.questions[0].options.as_ref().unwrap()[1],
            OptionValue::Text("In person".to_string())
        );
    }

    #[test]
    fn test_parse_questions_rejects_free_text() {
        assert!(parse_questions("Here are some questions you could ask...").is_err());
    }
}
