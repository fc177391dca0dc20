//! Generation parameters and safety thresholds attached to every request.
//!
//! Both are plain immutable values handed to a session at construction, so two
//! sessions in the same process can run with different policies.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Sampling parameters forwarded verbatim as `generationConfig`.
///
/// Deserialization goes through `GenerationConfig::new`, so out-of-range
/// values are rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGenerationConfig")]
pub struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl GenerationConfig {
    /// Validates ranges: temperature in [0, 2], top_k >= 1, top_p in [0, 1],
    /// max_output_tokens > 0.
    pub fn new(
        temperature: f32,
        top_k: u32,
        top_p: f32,
        max_output_tokens: u32,
    ) -> Result<Self, AppError> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(AppError::Configuration(format!(
                "temperature must be within [0, 2], got {temperature}"
            )));
        }
        if top_k == 0 {
            return Err(AppError::Configuration("top_k must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&top_p) {
            return Err(AppError::Configuration(format!(
                "top_p must be within [0, 1], got {top_p}"
            )));
        }
        if max_output_tokens == 0 {
            return Err(AppError::Configuration(
                "max_output_tokens must be positive".to_string(),
            ));
        }

        Ok(Self {
            temperature,
            top_k,
            top_p,
            max_output_tokens,
        })
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn top_k(&self) -> u32 {
        self.top_k
    }

    pub fn top_p(&self) -> f32 {
        self.top_p
    }

    pub fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl TryFrom<RawGenerationConfig> for GenerationConfig {
    type Error = AppError;

    fn try_from(raw: RawGenerationConfig) -> Result<Self, Self::Error> {
        GenerationConfig::new(raw.temperature, raw.top_k, raw.top_p, raw.max_output_tokens)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_k: 1,
            top_p: 1.0,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

impl HarmCategory {
    pub const ALL: [HarmCategory; 4] = [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
    BlockLowAndAbove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// One threshold per harm category. Serializes as the `safetySettings` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafetyPolicy {
    settings: Vec<SafetySetting>,
}

impl SafetyPolicy {
    /// Applies the same threshold to every known category.
    pub fn uniform(threshold: HarmBlockThreshold) -> Self {
        Self {
            settings: HarmCategory::ALL
                .iter()
                .map(|&category| SafetySetting {
                    category,
                    threshold,
                })
                .collect(),
        }
    }

    /// Replaces the threshold for `category`, keeping one entry per category.
    pub fn with_threshold(mut self, category: HarmCategory, threshold: HarmBlockThreshold) -> Self {
        match self.settings.iter_mut().find(|s| s.category == category) {
            Some(existing) => existing.threshold = threshold,
            None => self.settings.push(SafetySetting {
                category,
                threshold,
            }),
        }
        self
    }

    pub fn threshold_for(&self, category: HarmCategory) -> Option<HarmBlockThreshold> {
        self.settings
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.threshold)
    }

    pub fn settings(&self) -> &[SafetySetting] {
        &self.settings
    }
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self::uniform(HarmBlockThreshold::BlockMediumAndAbove)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generation_config_values() {
        let config = GenerationConfig::default();
        assert!((config.temperature() - 0.9).abs() < f32::EPSILON);
        assert_eq!(config.top_k(), 1);
        assert!((config.top_p() - 1.0).abs() < f32::EPSILON);
        assert_eq!(config.max_output_tokens(), 2048);
    }

    #[test]
    fn test_generation_config_serializes_camel_case() {
        let value = serde_json::to_value(GenerationConfig::default()).unwrap();
        assert_eq!(value["topK"], 1);
        assert_eq!(value["maxOutputTokens"], 2048);
        assert!(value.get("top_k").is_none());
    }

    #[test]
    fn test_generation_config_rejects_out_of_range_values() {
        assert!(GenerationConfig::new(2.5, 1, 1.0, 10).is_err());
        assert!(GenerationConfig::new(-0.1, 1, 1.0, 10).is_err());
        assert!(GenerationConfig::new(f32::NAN, 1, 1.0, 10).is_err());
        assert!(GenerationConfig::new(0.5, 0, 1.0, 10).is_err());
        assert!(GenerationConfig::new(0.5, 1, 1.5, 10).is_err());
        assert!(GenerationConfig::new(0.5, 1, 1.0, 0).is_err());
    }

    #[test]
    fn test_generation_config_accepts_boundaries() {
        assert!(GenerationConfig::new(0.0, 1, 0.0, 1).is_ok());
        assert!(GenerationConfig::new(2.0, 40, 1.0, 8192).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_values() {
        let json = r#"{"temperature":7.5,"topK":0,"topP":3.0,"maxOutputTokens":0}"#;
        let result = serde_json::from_str::<GenerationConfig>(json);
        let err = result.expect_err("out-of-range config must not deserialize");
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn test_deserialize_rejects_zero_top_k() {
        let json = r#"{"temperature":0.5,"topK":0,"topP":0.5,"maxOutputTokens":64}"#;
        assert!(serde_json::from_str::<GenerationConfig>(json).is_err());
    }

    #[test]
    fn test_deserialize_accepts_valid_config() {
        let json = r#"{"temperature":0.9,"topK":1,"topP":1.0,"maxOutputTokens":2048}"#;
        let config: GenerationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn test_default_safety_policy_covers_every_category() {
        let policy = SafetyPolicy::default();
        assert_eq!(policy.settings().len(), HarmCategory::ALL.len());
        for category in HarmCategory::ALL {
            assert_eq!(
                policy.threshold_for(category),
                Some(HarmBlockThreshold::BlockMediumAndAbove)
            );
        }
    }

    #[test]
    fn test_with_threshold_replaces_instead_of_duplicating() {
        let policy = SafetyPolicy::default()
            .with_threshold(HarmCategory::HateSpeech, HarmBlockThreshold::BlockOnlyHigh);
        assert_eq!(policy.settings().len(), 4);
        assert_eq!(
            policy.threshold_for(HarmCategory::HateSpeech),
            Some(HarmBlockThreshold::BlockOnlyHigh)
        );
    }

    #[test]
    fn test_safety_policy_wire_format() {
        let value = serde_json::to_value(SafetyPolicy::default()).unwrap();
        assert_eq!(value[0]["category"], "HARM_CATEGORY_HARASSMENT");
        assert_eq!(value[0]["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
        assert_eq!(value[3]["category"], "HARM_CATEGORY_DANGEROUS_CONTENT");
    }
}
