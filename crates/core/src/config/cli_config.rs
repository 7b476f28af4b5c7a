use crate::config::{ConfigError, ConfigSource, ConfigValidator, LogLevelValidator, RoutesDirValidator};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ROUTES_DIR_ENV: &str = "API_CLI_ROUTES_DIR";
pub const LOG_LEVEL_ENV: &str = "API_CLI_LOG";
pub const ASSUME_YES_ENV: &str = "API_CLI_ASSUME_YES";

/// Optional `api-cli.toml` in the project root
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    routes_dir: Option<PathBuf>,
    log_level: Option<String>,
    assume_yes: Option<bool>,
}

/// Resolved configuration for one invocation.
///
/// Layering, lowest first: built-in defaults, `api-cli.toml`, environment
/// variables, command line flags (applied by the caller through the
/// `with_*` methods).
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub project_root: PathBuf,
    pub routes_dir: PathBuf,
    pub log_level: String,
    /// Answer for every yes/no prompt; `None` means ask
    pub assume: Option<bool>,
    sources: HashMap<String, ConfigSource>,
}

impl CliConfig {
    pub const FILE_NAME: &'static str = "api-cli.toml";

    /// Built-in defaults rooted at `project_root`
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let mut sources = HashMap::new();
        sources.insert("routes_dir".to_string(), ConfigSource::Default("routes".to_string()));
        sources.insert("log_level".to_string(), ConfigSource::Default("warn".to_string()));
        sources.insert("assume".to_string(), ConfigSource::Default("prompt".to_string()));

        Self {
            project_root: project_root.into(),
            routes_dir: PathBuf::from("routes"),
            log_level: "warn".to_string(),
            assume: None,
            sources,
        }
    }

    /// Defaults, then the project config file, then the environment
    pub fn load(project_root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::new(project_root);
        config.apply_file()?;
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self) -> Result<(), ConfigError> {
        let path = self.project_root.join(Self::FILE_NAME);
        if !path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&path)?;
        let file: FileConfig = toml::from_str(&content)?;
        let origin = ConfigSource::File(path.display().to_string());

        if let Some(routes_dir) = file.routes_dir {
            self.routes_dir = routes_dir;
            self.sources.insert("routes_dir".to_string(), origin.clone());
        }
        if let Some(log_level) = file.log_level {
            self.log_level = log_level;
            self.sources.insert("log_level".to_string(), origin.clone());
        }
        if let Some(assume_yes) = file.assume_yes {
            self.assume = Some(assume_yes);
            self.sources.insert("assume".to_string(), origin);
        }

        Ok(())
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(routes_dir) = env::var(ROUTES_DIR_ENV) {
            self.routes_dir = PathBuf::from(routes_dir);
            self.sources.insert(
                "routes_dir".to_string(),
                ConfigSource::EnvVar(ROUTES_DIR_ENV.to_string()),
            );
        }

        if let Ok(log_level) = env::var(LOG_LEVEL_ENV) {
            self.log_level = log_level;
            self.sources.insert(
                "log_level".to_string(),
                ConfigSource::EnvVar(LOG_LEVEL_ENV.to_string()),
            );
        }

        if let Ok(assume) = env::var(ASSUME_YES_ENV) {
            self.assume = Some(parse_bool(ASSUME_YES_ENV, &assume)?);
            self.sources.insert(
                "assume".to_string(),
                ConfigSource::EnvVar(ASSUME_YES_ENV.to_string()),
            );
        }

        Ok(())
    }

    /// Override the prompt answer from `--yes` / `--no`
    pub fn with_assume(mut self, assume: Option<bool>, flag: &str) -> Self {
        if assume.is_some() {
            self.assume = assume;
            self.sources
                .insert("assume".to_string(), ConfigSource::Flag(flag.to_string()));
        }
        self
    }

    /// Override the log level from `--verbose`
    pub fn with_log_level(mut self, level: impl Into<String>, flag: &str) -> Self {
        self.log_level = level.into();
        self.sources
            .insert("log_level".to_string(), ConfigSource::Flag(flag.to_string()));
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        RoutesDirValidator.validate(self.routes_dir.as_path())?;
        LogLevelValidator.validate(self.log_level.as_str())?;
        Ok(())
    }

    /// Absolute location of the routes tree
    pub fn routes_path(&self) -> PathBuf {
        self.project_root.join(&self.routes_dir)
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn config_sources(&self) -> &HashMap<String, ConfigSource> {
        &self.sources
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Ok(true),
        "0" | "false" | "no" | "n" => Ok(false),
        _ => Err(ConfigError::invalid_value(field, value, "true or false")),
    }
}
