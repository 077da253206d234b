use thiserror::Error;

/// Error types for the simplification service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    /// The user submitted nothing, or only whitespace
    #[error("Input text is empty")]
    EmptyInput,
    /// No usable API key was configured
    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,
    /// The service rejected the configured key
    #[error("API key was rejected: {0}")]
    Unauthorized(String),
    /// The service is down, overloaded or rate limiting
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("Request timed out")]
    Timeout,
    /// Any other non-success response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// The response did not carry a completion
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
    #[error("Network error: {0}")]
    Network(String),
    /// Bad configuration value or unreadable examples file
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LlmError {
    /// Stable machine-readable name, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::EmptyInput => "empty_input",
            LlmError::MissingApiKey => "missing_api_key",
            LlmError::Unauthorized(_) => "unauthorized",
            LlmError::ServiceUnavailable(_) => "service_unavailable",
            LlmError::Timeout => "timeout",
            LlmError::Api { .. } => "api_error",
            LlmError::InvalidResponse(_) => "invalid_response",
            LlmError::Network(_) => "network_error",
            LlmError::Config(_) => "config_error",
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_connect() {
            LlmError::ServiceUnavailable(err.to_string())
        } else if err.is_decode() {
            LlmError::InvalidResponse(err.to_string())
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

/// Result type for simplification operations
pub type LlmResult<T> = Result<T, LlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct() {
        let errors = [
            LlmError::EmptyInput,
            LlmError::MissingApiKey,
            LlmError::Unauthorized(String::new()),
            LlmError::ServiceUnavailable(String::new()),
            LlmError::Timeout,
            LlmError::Api {
                status: 400,
                message: String::new(),
            },
            LlmError::InvalidResponse(String::new()),
            LlmError::Network(String::new()),
            LlmError::Config(String::new()),
        ];
        let mut kinds: Vec<&str> = errors.iter().map(LlmError::kind).collect();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(LlmError::EmptyInput.to_string(), "Input text is empty");
        assert_eq!(LlmError::MissingApiKey.to_string(), "GROQ_API_KEY is not set");
        assert_eq!(
            LlmError::Api {
                status: 422,
                message: "bad model".to_string()
            }
            .to_string(),
            "API error (422): bad model"
        );
    }
}
