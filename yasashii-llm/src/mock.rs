//! Mock simplifier for testing
//!
//! Deterministic, API-free provider for exercising the pipeline and the web
//! shell without keys or network access.
//!
//! # Example
//!
//! ```ignore
//! use yasashii_llm::{MockMode, MockSimplifier, Simplifier};
//!
//! #[tokio::test]
//! async fn test_simplify() {
//!     let mock = MockSimplifier::new(MockMode::Fixed("在留(ざいりゅう)".to_string()));
//!     assert_eq!(mock.simplify("anything").await.unwrap(), "在留(ざいりゅう)");
//! }
//! ```

use crate::error::{LlmError, LlmResult};
use crate::translator::{Simplifier, clean_completion, validate_input};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Mock behaviours for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return the input unchanged (trimmed)
    Echo,

    /// Return the same text for every input
    Fixed(String),

    /// Look up the input; unknown inputs are echoed
    Mappings(HashMap<String, String>),

    /// Fail as if the service were down
    Unavailable(String),

    /// Fail as if the request timed out
    Timeout,
}

#[derive(Debug, Clone)]
pub struct MockSimplifier {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
}

impl MockSimplifier {
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Mock that sleeps `delay_ms` before answering
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_mode(&self, text: &str) -> LlmResult<String> {
        match &self.mode {
            MockMode::Echo => Ok(clean_completion(text)),
            MockMode::Fixed(output) => Ok(clean_completion(output)),
            MockMode::Mappings(map) => Ok(map
                .get(text)
                .map(|output| clean_completion(output))
                .unwrap_or_else(|| clean_completion(text))),
            MockMode::Unavailable(msg) => Err(LlmError::ServiceUnavailable(msg.clone())),
            MockMode::Timeout => Err(LlmError::Timeout),
        }
    }
}

#[async_trait]
impl Simplifier for MockSimplifier {
    async fn simplify(&self, text: &str) -> LlmResult<String> {
        validate_input(text)?;
        self.apply_delay().await;
        self.apply_mode(text)
    }

    fn provider_name(&self) -> &str {
        "Mock Simplifier"
    }
}
