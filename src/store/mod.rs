//! # Curriculum Store
//!
//! Persistence interface consumed by the generation and publishing pipeline.
//!
//! ## Write model
//!
//! Lesson inserts are immediate: the pipeline needs the lesson id before it
//! can request questions. Every other write is *staged* on a
//! [`CurriculumUnitOfWork`] opened with [`CurriculumStore::begin`] and only
//! reaches storage when that unit commits, as a single batch. Each run owns
//! its unit, so concurrent runs on one store never see each other's pending
//! writes. Dropping a unit without committing discards its writes.
//!
//! ```text
//! insert_lesson ─────────────────────────────────────────▶ storage (immediate)
//! begin ─▶ unit: stage_questions / stage_* ─▶ commit ─────▶ storage (one batch)
//! ```
//!
//! ## Implementations
//!
//! - [`PgCurriculumStore`]: PostgreSQL via SQLx, each unit flushed in one transaction
//! - [`InMemoryCurriculumStore`]: embedded store with the same semantics

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryCurriculumStore, MemoryUnitOfWork};
pub use postgres::{PgCurriculumStore, PgUnitOfWork};

use crate::constants::UserRole;
use crate::error::Result;
use crate::models::{
    GeneratedLesson, Grade, LessonKey, LessonQuestion, LibraryItem, NewGeneratedLesson,
    NewLessonQuestion, NewLibraryItem, Subject,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// A write waiting for the next commit
#[derive(Debug, Clone, PartialEq)]
pub enum PendingWrite {
    Question(NewLessonQuestion),
    LessonPublished {
        lesson_id: i64,
        published_at: NaiveDateTime,
    },
    LibraryItem(NewLibraryItem),
}

#[async_trait]
pub trait CurriculumStore: Send + Sync {
    /// Active subjects ordered by name; `None` means no id filter
    async fn active_subjects(&self, subject_ids: Option<&[i64]>) -> Result<Vec<Subject>>;

    /// Active grades ordered by sort order; `None` means no id filter
    async fn active_grades(&self, grade_ids: Option<&[i64]>) -> Result<Vec<Grade>>;

    async fn find_lesson(&self, key: &LessonKey) -> Result<Option<GeneratedLesson>>;

    /// Lessons whose id is in `lesson_ids`. Unknown ids are skipped silently.
    async fn lessons_by_ids(&self, lesson_ids: &[i64]) -> Result<Vec<GeneratedLesson>>;

    /// Insert a draft lesson immediately and return it with its id.
    ///
    /// Returns `Ok(None)` when a lesson with the same key already exists.
    async fn insert_lesson(&self, lesson: &NewGeneratedLesson) -> Result<Option<GeneratedLesson>>;

    /// Open a unit of work that buffers writes for one run
    fn begin(&self) -> Box<dyn CurriculumUnitOfWork + '_>;

    async fn questions_for_lesson(&self, lesson_id: i64) -> Result<Vec<LessonQuestion>>;

    async fn library_items_for_owner(
        &self,
        owner_role: UserRole,
        owner_id: i64,
    ) -> Result<Vec<LibraryItem>>;
}

/// Pending writes of a single run
#[async_trait]
pub trait CurriculumUnitOfWork: Send {
    async fn stage_questions(&mut self, questions: &[NewLessonQuestion]) -> Result<()>;

    async fn stage_lesson_published(
        &mut self,
        lesson_id: i64,
        published_at: NaiveDateTime,
    ) -> Result<()>;

    async fn stage_library_item(&mut self, item: NewLibraryItem) -> Result<()>;

    fn pending_write_count(&self) -> usize;

    /// Flush all staged writes as one batch. The unit is empty afterwards,
    /// whether or not the flush succeeded.
    async fn commit(&mut self) -> Result<()>;

    /// Drop all staged writes
    async fn rollback(&mut self) -> Result<()>;
}
