//! # Curriculum Configuration
//!
//! Layered, environment-aware configuration for the pipeline and its
//! PostgreSQL store.
//!
//! ## Sources (lowest precedence first)
//!
//! 1. Built-in defaults
//! 2. `config/curriculum.toml`
//! 3. `config/curriculum.{environment}.toml`
//! 4. `CURRICULUM__*` environment variables (`__` separates nested keys)
//!
//! `DATABASE_URL` is honoured when `CURRICULUM__DATABASE__URL` is not set.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use curriculum_core::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new().load()?;
//! println!("pool size: {}", config.database.max_connections);
//! # Ok(())
//! # }
//! ```

pub mod loader;

pub use loader::{detect_environment, ConfigLoader};

use crate::error::{CurriculumError, Result};
use serde::{Deserialize, Serialize};

/// Root configuration structure mirroring `config/curriculum.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CurriculumConfig {
    pub database: DatabaseConfig,
    pub generation: GenerationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/curriculum_development".to_string(),
            max_connections: 5,
            acquire_timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Run generation batches one at a time within this process
    pub serialize_runs: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            serialize_runs: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive such as `info` or `curriculum_core=debug`.
    /// Falls back to an environment-based default when unset.
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl CurriculumConfig {
    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(CurriculumError::ConfigurationError(
                "database.url must not be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(CurriculumError::ConfigurationError(
                "database.max_connections must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
