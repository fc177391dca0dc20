use std::fmt;

use crate::errors::AppError;
use crate::llm_client::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Process configuration loaded from environment variables (and `.env` if present).
/// Fails before any network call if the API credential is missing.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` delegates here.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            api_key: require_var(&lookup, "API_KEY")?,
            model: optional_var(&lookup, "GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: optional_var(&lookup, "GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            rust_log: optional_var(&lookup, "RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn require_var<F>(lookup: &F, key: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    optional_var(lookup, key).ok_or_else(|| {
        AppError::Configuration(format!("Required environment variable '{key}' is not set"))
    })
}

fn optional_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        let result = Config::from_lookup(lookup_from(&[("GEMINI_MODEL", "gemini-1.0-pro")]));
        match result {
            Err(AppError::Configuration(msg)) => assert!(msg.contains("API_KEY")),
            other => panic!("expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let result = Config::from_lookup(lookup_from(&[("API_KEY", "   ")]));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_defaults_applied_when_optional_vars_absent() {
        let config = Config::from_lookup(lookup_from(&[("API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_optional_vars_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-1.0-pro"),
            ("GEMINI_API_BASE", "http://localhost:9000/v1beta"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-1.0-pro");
        assert_eq!(config.api_base, "http://localhost:9000/v1beta");
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_debug_output_redacts_api_key() {
        let config = Config::from_lookup(lookup_from(&[("API_KEY", "super-secret")])).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
