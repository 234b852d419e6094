//! Error types for the curriculum pipeline.
//!
//! Store, model and configuration APIs return [`Result`]. The two pipeline
//! operations never surface these errors directly; they fold them into the
//! `error_messages` list of their result objects.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurriculumError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Store error: {0}")]
    StoreError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Invalid {kind} value: {value}")]
    InvalidEnumValue { kind: &'static str, value: String },
}

impl CurriculumError {
    pub fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            kind,
            value: value.into(),
        }
    }
}

impl From<sqlx::Error> for CurriculumError {
    fn from(err: sqlx::Error) -> Self {
        CurriculumError::DatabaseError(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for CurriculumError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        CurriculumError::DatabaseError(format!("Migration failed: {err}"))
    }
}

impl From<serde_json::Error> for CurriculumError {
    fn from(error: serde_json::Error) -> Self {
        CurriculumError::ValidationError(format!("JSON serialization error: {error}"))
    }
}

impl From<config::ConfigError> for CurriculumError {
    fn from(error: config::ConfigError) -> Self {
        CurriculumError::ConfigurationError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CurriculumError>;
