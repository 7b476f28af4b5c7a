pub mod config;
pub mod error;
pub mod route;

pub use config::{CliConfig, ConfigError, ConfigSource};
pub use error::CoreError;
pub use route::{HttpMethod, Route};
