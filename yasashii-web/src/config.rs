use std::net::SocketAddr;
use thiserror::Error;
use yasashii::render::DEFAULT_LINE_HEIGHT;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server settings: `YASASHII_BIND`, `YASASHII_LINE_HEIGHT`, `YASASHII_MOCK`
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub line_height: f64,
    /// Serve with the echo mock instead of the Groq provider
    pub mock: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            line_height: DEFAULT_LINE_HEIGHT,
            mock: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(raw) = non_blank(lookup("YASASHII_BIND")) {
            config.bind = raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    key: "YASASHII_BIND",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(raw) = non_blank(lookup("YASASHII_LINE_HEIGHT")) {
            let invalid = |reason: String| ConfigError::Invalid {
                key: "YASASHII_LINE_HEIGHT",
                value: raw.clone(),
                reason,
            };
            let value: f64 = raw
                .trim()
                .parse()
                .map_err(|e: std::num::ParseFloatError| invalid(e.to_string()))?;
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid("must be a positive number".to_string()));
            }
            config.line_height = value;
        }

        if let Some(raw) = non_blank(lookup("YASASHII_MOCK")) {
            config.mock = matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
