//! Configuration Loader
//!
//! Builds a [`CurriculumConfig`] from TOML files and environment variables
//! with the `config` crate.

use super::CurriculumConfig;
use crate::error::Result;
use config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_CONFIG_DIR: &str = "config";
const CONFIG_FILE_STEM: &str = "curriculum";
const DEFAULT_ENV_PREFIX: &str = "CURRICULUM";

/// Current environment from `CURRICULUM_ENV`, then `APP_ENV`, else `development`
pub fn detect_environment() -> String {
    env::var("CURRICULUM_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    explicit_file: Option<PathBuf>,
    environment: String,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            explicit_file: None,
            environment: detect_environment(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Directory searched for `curriculum.toml` and `curriculum.{env}.toml`
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Load this file instead of searching the config directory
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    fn file_sources(&self) -> Vec<(PathBuf, bool)> {
        match &self.explicit_file {
            Some(path) => vec![(path.clone(), true)],
            None => vec![
                (self.config_dir.join(format!("{CONFIG_FILE_STEM}.toml")), false),
                (
                    self.config_dir
                        .join(format!("{CONFIG_FILE_STEM}.{}.toml", self.environment)),
                    false,
                ),
            ],
        }
    }

    /// Load, merge and validate configuration
    pub fn load(&self) -> Result<CurriculumConfig> {
        let mut builder = Config::builder();
        for (path, required) in self.file_sources() {
            debug!(path = %path.display(), required, "Adding configuration file source");
            builder = builder.add_source(File::from(path.as_path()).required(required));
        }
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let mut config: CurriculumConfig = builder.build()?.try_deserialize()?;

        let url_var = format!("{}__DATABASE__URL", self.env_prefix);
        if env::var(&url_var).is_err() {
            if let Ok(database_url) = env::var("DATABASE_URL") {
                config.database.url = database_url;
            }
        }

        config.validate()?;

        debug!(
            environment = %self.environment,
            max_connections = config.database.max_connections,
            serialize_runs = config.generation.serialize_runs,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Load configuration from a single file plus environment overrides
    pub fn load_file(path: &Path) -> Result<CurriculumConfig> {
        Self::new().with_file(path).load()
    }
}
