use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration for the CLI
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (e.g. "warn", "api_cli_codegen=debug")
    pub level: String,
    /// Include targets in log lines
    pub include_target: bool,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            include_target: false,
        }
    }

    pub fn with_target(mut self, include_target: bool) -> Self {
        self.include_target = include_target;
        self
    }
}

/// Initialize tracing. Logs go to stderr; stdout carries command output
/// such as generated schemas.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            Layer::new()
                .with_writer(io::stderr)
                .with_target(config.include_target),
        )
        .try_init()?;

    tracing::debug!(level = %config.level, "logging initialized");
    Ok(())
}

/// `-v` count to a level, on top of the configured one
pub fn level_for_verbosity(configured: &str, verbose: u8) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
