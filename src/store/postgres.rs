//! PostgreSQL-backed [`CurriculumStore`].

use super::{CurriculumStore, CurriculumUnitOfWork, PendingWrite};
use crate::config::DatabaseConfig;
use crate::constants::UserRole;
use crate::error::Result;
use crate::models::{
    GeneratedLesson, Grade, LessonKey, LessonQuestion, LibraryItem, NewGeneratedLesson,
    NewLessonQuestion, NewLibraryItem, Subject,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{debug, info};

pub struct PgCurriculumStore {
    pool: PgPool,
}

impl PgCurriculumStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool from configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(&config.url)
            .await?;

        info!(
            max_connections = config.max_connections,
            "Connected curriculum store to PostgreSQL"
        );

        Ok(Self::new(pool))
    }

    /// Apply the embedded schema migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CurriculumStore for PgCurriculumStore {
    async fn active_subjects(&self, subject_ids: Option<&[i64]>) -> Result<Vec<Subject>> {
        Ok(Subject::list_active(&self.pool, subject_ids).await?)
    }

    async fn active_grades(&self, grade_ids: Option<&[i64]>) -> Result<Vec<Grade>> {
        Ok(Grade::list_active(&self.pool, grade_ids).await?)
    }

    async fn find_lesson(&self, key: &LessonKey) -> Result<Option<GeneratedLesson>> {
        Ok(GeneratedLesson::find_by_key(&self.pool, key).await?)
    }

    async fn lessons_by_ids(&self, lesson_ids: &[i64]) -> Result<Vec<GeneratedLesson>> {
        if lesson_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(GeneratedLesson::find_by_ids(&self.pool, lesson_ids).await?)
    }

    async fn insert_lesson(&self, lesson: &NewGeneratedLesson) -> Result<Option<GeneratedLesson>> {
        Ok(GeneratedLesson::insert_if_absent(&self.pool, lesson).await?)
    }

    fn begin(&self) -> Box<dyn CurriculumUnitOfWork + '_> {
        Box::new(PgUnitOfWork {
            pool: &self.pool,
            pending: Vec::new(),
        })
    }

    async fn questions_for_lesson(&self, lesson_id: i64) -> Result<Vec<LessonQuestion>> {
        Ok(LessonQuestion::list_for_lesson(&self.pool, lesson_id).await?)
    }

    async fn library_items_for_owner(
        &self,
        owner_role: UserRole,
        owner_id: i64,
    ) -> Result<Vec<LibraryItem>> {
        Ok(LibraryItem::list_for_owner(&self.pool, owner_role, owner_id).await?)
    }
}

/// Writes staged by one run, flushed in a single transaction on commit
#[derive(Debug)]
pub struct PgUnitOfWork<'a> {
    pool: &'a PgPool,
    pending: Vec<PendingWrite>,
}

#[async_trait]
impl CurriculumUnitOfWork for PgUnitOfWork<'_> {
    async fn stage_questions(&mut self, questions: &[NewLessonQuestion]) -> Result<()> {
        self.pending
            .extend(questions.iter().cloned().map(PendingWrite::Question));
        Ok(())
    }

    async fn stage_lesson_published(
        &mut self,
        lesson_id: i64,
        published_at: NaiveDateTime,
    ) -> Result<()> {
        self.pending.push(PendingWrite::LessonPublished {
            lesson_id,
            published_at,
        });
        Ok(())
    }

    async fn stage_library_item(&mut self, item: NewLibraryItem) -> Result<()> {
        self.pending.push(PendingWrite::LibraryItem(item));
        Ok(())
    }

    fn pending_write_count(&self) -> usize {
        self.pending.len()
    }

    async fn commit(&mut self) -> Result<()> {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for write in &pending {
            match write {
                PendingWrite::Question(question) => {
                    LessonQuestion::insert(&mut *tx, question).await?;
                }
                PendingWrite::LessonPublished {
                    lesson_id,
                    published_at,
                } => {
                    GeneratedLesson::mark_published(&mut *tx, *lesson_id, *published_at).await?;
                }
                PendingWrite::LibraryItem(item) => {
                    LibraryItem::insert(&mut *tx, item).await?;
                }
            }
        }
        tx.commit().await?;

        debug!(write_count = pending.len(), "Committed pending curriculum writes");
        Ok(())
    }

    async fn rollback(&mut self) -> Result<()> {
        self.pending.clear();
        Ok(())
    }
}
