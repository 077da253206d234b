//! Provider abstraction for the rewriting service.
//!
//! A [`Simplifier`] turns ordinary Japanese into yasashii nihongo with bracket
//! furigana. What comes back is only expected to contain annotations; the
//! furigana engine accepts whatever string the provider returns.
//!
//! # Example
//!
//! ```ignore
//! use yasashii_llm::{GroqProvider, Simplifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GroqProvider::from_env()?;
//!     let result = provider.simplify("在留カードをお持ちになってください。").await?;
//!     println!("{}", result); // 在留(ざいりゅう)カードを持(も)ってきてください。
//!     Ok(())
//! }
//! ```

use crate::error::{LlmError, LlmResult};
use async_trait::async_trait;

/// Generic trait for simplification providers
///
/// All methods are async to support network-bound providers.
#[async_trait]
pub trait Simplifier: Send + Sync {
    /// Rewrite `text` into simplified Japanese with bracket readings
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The rewritten text, trimmed
    /// * `Err(LlmError::EmptyInput)` - If `text` is blank
    /// * `Err(LlmError)` - If the provider fails
    async fn simplify(&self, text: &str) -> LlmResult<String>;

    /// Name used in logs, e.g. "Groq"
    fn provider_name(&self) -> &str;
}

/// Reject empty or whitespace-only input before any request is made
pub fn validate_input(text: &str) -> LlmResult<()> {
    if text.trim().is_empty() {
        return Err(LlmError::EmptyInput);
    }
    Ok(())
}

/// Strip the surrounding whitespace models tend to emit
pub fn clean_completion(raw: &str) -> String {
    raw.trim().to_string()
}
