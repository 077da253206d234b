//! Language-model rewriting into yasashii nihongo
//!
//! The provider returns bracket-furigana text; rendering it is the job of the
//! [`yasashii`] engine, which accepts whatever string comes back.
//!
//! # Workflow Example
//!
//! ```ignore
//! use yasashii::FuriganaEngine;
//! use yasashii_llm::{GroqProvider, Simplifier};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Rewrite with the language model
//!     let provider = GroqProvider::from_env()?;
//!     let annotated = provider.simplify("在留カードをお持ちください。").await?;
//!
//!     // 2. Render the readings
//!     let engine = FuriganaEngine::new();
//!     println!("{}", engine.to_ruby(&annotated));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod groq;
pub mod loader;
pub mod mock;
pub mod prompt;
pub mod translator;


// Re-export main types for convenient access
pub use config::LlmConfig;
pub use data::{FewShotExample, SAMPLE_TEXTS, SampleText, default_examples};
pub use error::{LlmError, LlmResult};
pub use groq::GroqProvider;
pub use loader::{load_examples_from_file, load_examples_from_str};
pub use mock::{MockMode, MockSimplifier};
pub use prompt::PromptBuilder;
pub use translator::Simplifier;

use yasashii::{FuriganaEngine, Renditions};

/// Rewrite `text` with `provider`, then render every form of the result.
pub async fn simplify_and_render(
    provider: &dyn Simplifier,
    engine: &FuriganaEngine,
    text: &str,
) -> LlmResult<Renditions> {
    let annotated = provider.simplify(text).await?;
    Ok(engine.renditions(&annotated))
}
