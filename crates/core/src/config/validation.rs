use std::path::Path;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': '{value}'. Expected: {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}

/// Trait for validating configuration values
pub trait ConfigValidator<T: ?Sized> {
    fn validate(&self, value: &T) -> Result<(), ConfigError>;
}

/// Routes directory must be a non-empty relative path inside the project
pub struct RoutesDirValidator;

impl ConfigValidator<Path> for RoutesDirValidator {
    fn validate(&self, value: &Path) -> Result<(), ConfigError> {
        if value.as_os_str().is_empty() {
            return Err(ConfigError::invalid_value(
                "routes_dir",
                "",
                "non-empty relative path",
            ));
        }
        if value.is_absolute() {
            return Err(ConfigError::invalid_value(
                "routes_dir",
                value.display().to_string(),
                "path relative to the project root",
            ));
        }
        Ok(())
    }
}

/// Log filter must be understood by `tracing_subscriber::EnvFilter`
pub struct LogLevelValidator;

impl ConfigValidator<str> for LogLevelValidator {
    fn validate(&self, value: &str) -> Result<(), ConfigError> {
        tracing_subscriber::EnvFilter::try_new(value)
            .map(|_| ())
            .map_err(|_| {
                ConfigError::invalid_value(
                    "log_level",
                    value,
                    "trace, debug, info, warn, error, off or a tracing filter directive",
                )
            })
    }
}
