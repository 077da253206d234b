use thiserror::Error;

/// Errors raised while configuring the engine.
///
/// Matching itself never fails: every input string has a defined output.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A custom character class was rejected before compilation
    #[error("Invalid character class: {0}")]
    InvalidClasses(String),

    /// The composed pattern failed to compile
    #[error("Pattern compilation failed: {0}")]
    Regex(#[from] regex::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
