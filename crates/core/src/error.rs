use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Example shown whenever a JSON sample fails to parse.
pub const INVALID_JSON_MESSAGE: &str = r#"Invalid JSON object. Please enter a valid JSON object. The format should be {"reporting_due_date": {"type": ["String", "Null"], "format": "date"}, "member":"hello", "id": 1}"#;

/// Core error type for api-cli
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{}", INVALID_JSON_MESSAGE)]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("File already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Prompt interrupted")]
    Interrupted,
}

impl CoreError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn already_exists(path: impl Into<PathBuf>) -> Self {
        Self::AlreadyExists { path: path.into() }
    }

    /// True when the user aborted an interactive prompt (Ctrl-C / Esc)
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

impl From<ConfigError> for CoreError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => Self::Io(io),
            ConfigError::Toml(toml) => Self::Toml(toml),
            other => Self::configuration(other.to_string()),
        }
    }
}
