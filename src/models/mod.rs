//! # Curriculum Models
//!
//! Persisted records of the curriculum pipeline. Each model maps to one
//! PostgreSQL table (see `migrations/`) and carries its own query functions;
//! storage-agnostic access goes through [`crate::store::CurriculumStore`].

pub mod generated_lesson;
pub mod grade;
pub mod lesson_question;
pub mod library_item;
pub mod subject;

// Re-export core models for easy access
pub use generated_lesson::{GeneratedLesson, LessonKey, NewGeneratedLesson};
pub use grade::{grade_level, Grade, NewGrade};
pub use lesson_question::{LessonQuestion, NewLessonQuestion};
pub use library_item::{LibraryItem, NewLibraryItem};
pub use subject::{NewSubject, Subject};
