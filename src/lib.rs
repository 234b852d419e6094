#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Curriculum Core
//!
//! Rule-based lesson generation and publishing for a K-12 learning platform.
//!
//! ## Overview
//!
//! The pipeline turns the catalogue of active subjects and grades into draft
//! lessons, each holding five multiple-choice questions, and later publishes
//! chosen lessons into per-owner libraries.
//!
//! ## Architecture
//!
//! ```text
//! GenerationRequest ─▶ LessonGenerator ─▶ QuestionGenerator ─▶ StrategyRegistry ─▶ ContentStrategy
//!                            │
//!                            ▼
//!                     CurriculumStore (PostgreSQL | in-memory)
//!                            ▲
//! PublishRequest ────▶ LessonPublisher
//! ```
//!
//! ## Key Features
//!
//! - **Idempotent generation**: at most one lesson per (subject, grade, difficulty)
//! - **Dry runs**: full previews with no writes
//! - **Pair-level isolation**: one failing subject/grade pair never aborts a run
//! - **Single-batch commits**: staged writes reach storage in one transaction
//!
//! ## Module Organization
//!
//! - [`content`] - Subject content strategies and their question tables
//! - [`registry`] - Slug to strategy resolution with a default fallback
//! - [`orchestration`] - Generation and publishing pipeline
//! - [`store`] - Persistence interface with PostgreSQL and in-memory stores
//! - [`models`] - Database rows and insert structs
//! - [`config`] - Layered configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup and helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use curriculum_core::config::ConfigLoader;
//! use curriculum_core::constants::UserRole;
//! use curriculum_core::orchestration::{GenerationRequest, LessonGenerator, QuestionGenerator};
//! use curriculum_core::store::PgCurriculumStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new().load()?;
//! let store = Arc::new(PgCurriculumStore::connect(&config.database).await?);
//!
//! let generator = LessonGenerator::with_config(store, QuestionGenerator::default(), &config.generation);
//! let result = generator
//!     .generate_lessons(GenerationRequest::all(1, UserRole::Admin).dry_run(true))
//!     .await;
//! println!("would create {} lessons", result.lessons_created);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod logging;
pub mod models;
pub mod orchestration;
pub mod registry;
pub mod store;

pub use constants::{Difficulty, LessonStatus, UserRole};
pub use error::{CurriculumError, Result};
pub use orchestration::{
    GenerationRequest, GenerationResult, LessonGenerator, LessonPublisher, PublishRequest,
    PublishResult, QuestionGenerator,
};
pub use registry::StrategyRegistry;
pub use store::{CurriculumStore, CurriculumUnitOfWork, InMemoryCurriculumStore, PgCurriculumStore};
