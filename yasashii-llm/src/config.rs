//! Settings for the completion provider, read from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `GROQ_API_KEY` | required |
//! | `GROQ_BASE_URL` | `https://api.groq.com/openai/v1` |
//! | `YASASHII_MODEL` | `llama-3.3-70b-versatile` |
//! | `YASASHII_TEMPERATURE` | `0.3` |
//! | `YASASHII_MAX_TOKENS` | `2048` |
//! | `YASASHII_TIMEOUT_SECS` | `30` |
//! | `YASASHII_NUM_EXAMPLES` | `8` |

use crate::error::{LlmError, LlmResult};
use std::str::FromStr;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Placeholder shipped in sample env files; treated as unset.
pub const PLACEHOLDER_API_KEY: &str = "gsk_YOUR_DEMO_KEY_HERE";

#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    pub base_url: String,
    /// How many few-shot examples go into each prompt
    pub num_examples: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        LlmConfig {
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.3,
            max_tokens: 2048,
            timeout_secs: 30,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            num_examples: 8,
        }
    }
}

impl LlmConfig {
    pub fn from_env() -> LlmResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> LlmResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = LlmConfig::default();
        let config = LlmConfig {
            model: lookup("YASASHII_MODEL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.model),
            temperature: parse_var(&lookup, "YASASHII_TEMPERATURE", defaults.temperature)?,
            max_tokens: parse_var(&lookup, "YASASHII_MAX_TOKENS", defaults.max_tokens)?,
            timeout_secs: parse_var(&lookup, "YASASHII_TIMEOUT_SECS", defaults.timeout_secs)?,
            base_url: lookup("GROQ_BASE_URL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.base_url),
            num_examples: parse_var(&lookup, "YASASHII_NUM_EXAMPLES", defaults.num_examples)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LlmResult<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(LlmError::Config(format!(
                "temperature must be between 0 and 2, got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(LlmError::Config("max_tokens must be positive".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(LlmError::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> LlmResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| LlmError::Config(format!("{}={:?}: {}", key, raw, e))),
    }
}

/// Accept a key only if it is present, non-blank and not the placeholder.
pub fn resolve_api_key(value: Option<String>) -> LlmResult<String> {
    match value {
        Some(key) if !key.trim().is_empty() && key.trim() != PLACEHOLDER_API_KEY => {
            Ok(key.trim().to_string())
        }
        _ => Err(LlmError::MissingApiKey),
    }
}

pub fn api_key_from_env() -> LlmResult<String> {
    resolve_api_key(std::env::var(API_KEY_VAR).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LlmConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, LlmConfig::default());
        assert_eq!(config.num_examples, 8);
    }

    #[test]
    fn test_overrides() {
        let config = LlmConfig::from_lookup(lookup_from(&[
            ("YASASHII_MODEL", "llama-3.1-8b-instant"),
            ("YASASHII_TEMPERATURE", "0.7"),
            ("YASASHII_MAX_TOKENS", "512"),
            ("YASASHII_TIMEOUT_SECS", "5"),
            ("GROQ_BASE_URL", "http://localhost:8080/v1"),
            ("YASASHII_NUM_EXAMPLES", "3"),
        ]))
        .unwrap();
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.num_examples, 3);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config =
            LlmConfig::from_lookup(lookup_from(&[("YASASHII_MODEL", " "), ("YASASHII_MAX_TOKENS", "")]))
                .unwrap();
        assert_eq!(config.model, LlmConfig::default().model);
        assert_eq!(config.max_tokens, 2048);
    }

    #[test]
    fn test_unparseable_value_is_config_error() {
        let result = LlmConfig::from_lookup(lookup_from(&[("YASASHII_MAX_TOKENS", "lots")]));
        match result {
            Err(LlmError::Config(msg)) => assert!(msg.contains("YASASHII_MAX_TOKENS")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_temperature() {
        let result = LlmConfig::from_lookup(lookup_from(&[("YASASHII_TEMPERATURE", "3.5")]));
        assert!(matches!(result, Err(LlmError::Config(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = LlmConfig::from_lookup(lookup_from(&[("YASASHII_TIMEOUT_SECS", "0")]));
        assert!(matches!(result, Err(LlmError::Config(_))));
    }

    #[test]
    fn test_resolve_api_key() {
        assert_eq!(
            resolve_api_key(Some(" gsk_real ".to_string())).unwrap(),
            "gsk_real"
        );
        assert_eq!(resolve_api_key(None), Err(LlmError::MissingApiKey));
        assert_eq!(
            resolve_api_key(Some("   ".to_string())),
            Err(LlmError::MissingApiKey)
        );
        assert_eq!(
            resolve_api_key(Some(PLACEHOLDER_API_KEY.to_string())),
            Err(LlmError::MissingApiKey)
        );
    }
}
