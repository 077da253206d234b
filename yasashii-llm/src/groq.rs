//! Groq chat-completion provider
//!
//! Talks to Groq's OpenAI-compatible `/chat/completions` endpoint. Any server
//! speaking that protocol works by pointing `GROQ_BASE_URL` at it.
//!
//! # Authentication
//!
//! The API key is read from `GROQ_API_KEY`. Obtain one from
//! https://console.groq.com/
//!
//! # Example
//!
//! ```ignore
//! use yasashii_llm::{GroqProvider, Simplifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GroqProvider::from_env()?;
//!     let result = provider.simplify("燃えるごみは所定の集積所に出してください。").await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use crate::config::{LlmConfig, api_key_from_env, resolve_api_key};
use crate::error::{LlmError, LlmResult};
use crate::prompt::PromptBuilder;
use crate::translator::{Simplifier, clean_completion, validate_input};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct GroqProvider {
    /// API key for bearer authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    config: LlmConfig,
    prompts: PromptBuilder,
}

impl GroqProvider {
    /// Maximum input length in characters; longer inputs would not fit the
    /// completion budget anyway
    const MAX_INPUT_CHARS: usize = 10_000;

    /// Create a provider with an explicit API key
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(LlmError::MissingApiKey)` - If the key is blank or the placeholder
    /// * `Err(LlmError)` - If the config is invalid or the HTTP client fails to build
    pub fn new(api_key: String, config: LlmConfig) -> LlmResult<Self> {
        let api_key = resolve_api_key(Some(api_key))?;
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            config,
            prompts: PromptBuilder::default(),
        })
    }

    /// Create a provider from `GROQ_API_KEY` and the `YASASHII_*` settings
    pub fn from_env() -> LlmResult<Self> {
        let config = LlmConfig::from_env()?;
        let api_key = api_key_from_env()?;
        Self::new(api_key, config)
    }

    /// Replace the built-in prompt material
    pub fn with_prompts(mut self, prompts: PromptBuilder) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn request_body(&self, text: &str) -> Value {
        json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": self.prompts.build_system_message() },
                {
                    "role": "user",
                    "content": self.prompts.build_user_message(text, self.config.num_examples)
                }
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }

    /// Map a non-success status to the failure kind callers distinguish
    fn status_error(status: StatusCode, body: String) -> LlmError {
        match status.as_u16() {
            401 | 403 => LlmError::Unauthorized(format!("{}: {}", status, body)),
            408 | 504 => LlmError::Timeout,
            429 => LlmError::ServiceUnavailable(format!("rate limited: {}", body)),
            _ if status.is_server_error() => {
                LlmError::ServiceUnavailable(format!("{}: {}", status, body))
            }
            code => LlmError::Api {
                status: code,
                message: body,
            },
        }
    }

    /// Pull `choices[0].message.content` out of a completion response
    fn extract_content(json: &Value) -> LlmResult<String> {
        let content = json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| {
                LlmError::InvalidResponse(
                    "missing 'choices[0].message.content' in response".to_string(),
                )
            })?;

        let cleaned = clean_completion(content);
        if cleaned.is_empty() {
            return Err(LlmError::InvalidResponse(
                "completion was empty".to_string(),
            ));
        }
        Ok(cleaned)
    }
}

impl std::fmt::Debug for GroqProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqProvider")
            .field("api_key", &"***")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

#[async_trait]
impl Simplifier for GroqProvider {
    async fn simplify(&self, text: &str) -> LlmResult<String> {
        validate_input(text)?;

        let chars = text.chars().count();
        if chars > Self::MAX_INPUT_CHARS {
            return Err(LlmError::Config(format!(
                "Input exceeds maximum length of {} characters ({})",
                Self::MAX_INPUT_CHARS,
                chars
            )));
        }

        debug!(
            model = %self.config.model,
            chars,
            examples = self.config.num_examples,
            "sending completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&self.request_body(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(%status, "completion request failed");
            return Err(Self::status_error(status, body));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let content = Self::extract_content(&json)?;
        debug!(chars = content.chars().count(), "received completion");
        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "Groq"
    }
}
