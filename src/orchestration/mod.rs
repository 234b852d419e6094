//! # Curriculum Orchestration
//!
//! The generation and publishing pipeline.
//!
//! ## Core Components
//!
//! - **QuestionGenerator**: facade that resolves a subject's strategy and
//!   delegates content and question production to it
//! - **LessonGenerator**: walks the subject × grade universe, enforces one
//!   lesson per (subject, grade, difficulty) and supports dry runs
//! - **LessonPublisher**: publishes lessons and creates library items
//!
//! Both pipeline operations return a result value instead of an error.
//! Callers detect failure by checking `has_errors()`.
//!
//! ## Usage
//!
//! ```rust
//! use curriculum_core::constants::UserRole;
//! use curriculum_core::models::{NewGrade, NewSubject};
//! use curriculum_core::orchestration::{GenerationRequest, LessonGenerator, QuestionGenerator};
//! use curriculum_core::store::InMemoryCurriculumStore;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let store = Arc::new(InMemoryCurriculumStore::new());
//! store.add_subject(NewSubject::active("Math", "mathematics"));
//! store.add_grade(NewGrade::active("3", "Grade 3", 3));
//!
//! let generator = LessonGenerator::new(store.clone(), QuestionGenerator::default());
//! let result = generator
//!     .generate_lessons(GenerationRequest::all(1, UserRole::Admin))
//!     .await;
//! assert_eq!(result.lessons_created, 2);
//! assert_eq!(result.questions_created, 10);
//! # });
//! ```

pub mod lesson_generator;
pub mod lesson_publisher;
pub mod question_generator;
pub mod types;

pub use lesson_generator::LessonGenerator;
pub use lesson_publisher::LessonPublisher;
pub use question_generator::QuestionGenerator;
pub use types::{GenerationRequest, GenerationResult, PublishRequest, PublishResult};
