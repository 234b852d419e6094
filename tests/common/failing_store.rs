use async_trait::async_trait;
use chrono::NaiveDateTime;
use curriculum_core::constants::UserRole;
use curriculum_core::error::{CurriculumError, Result};
use curriculum_core::models::{
    GeneratedLesson, Grade, LessonKey, LessonQuestion, LibraryItem, NewGeneratedLesson,
    NewLessonQuestion, NewLibraryItem, Subject,
};
use curriculum_core::store::{CurriculumStore, CurriculumUnitOfWork, InMemoryCurriculumStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Which store calls should fail or misbehave
#[derive(Debug, Clone, Default)]
pub struct FailurePlan {
    /// Fail lesson lookups for this (subject_id, grade_id) pair
    pub fail_pair: Option<(i64, i64)>,
    pub fail_universe: bool,
    pub fail_commit: bool,
    /// Fail staging a library item for this owner id
    pub fail_library_owner: Option<i64>,
    /// Yield to the scheduler after lookups and before staging library items,
    /// letting concurrent runs interleave between a lookup and the insert that follows
    pub yield_calls: bool,
    /// Report every lesson as missing, forcing inserts to hit the unique key
    pub blind_lookup: bool,
}

/// Delegates to an in-memory store, injecting failures from a [`FailurePlan`]
pub struct FailingStore {
    inner: Arc<InMemoryCurriculumStore>,
    plan: FailurePlan,
    insert_conflicts: AtomicUsize,
}

impl FailingStore {
    pub fn new(inner: Arc<InMemoryCurriculumStore>, plan: FailurePlan) -> Self {
        Self {
            inner,
            plan,
            insert_conflicts: AtomicUsize::new(0),
        }
    }

    /// Lesson inserts that lost to an existing row
    pub fn insert_conflicts(&self) -> usize {
        self.insert_conflicts.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if self.plan.yield_calls {
            tokio::task::yield_now().await;
        }
    }
}

fn injected(what: &str) -> CurriculumError {
    CurriculumError::StoreError(format!("injected {what} failure"))
}

#[async_trait]
impl CurriculumStore for FailingStore {
    async fn active_subjects(&self, subject_ids: Option<&[i64]>) -> Result<Vec<Subject>> {
        if self.plan.fail_universe {
            return Err(injected("universe"));
        }
        self.inner.active_subjects(subject_ids).await
    }

    async fn active_grades(&self, grade_ids: Option<&[i64]>) -> Result<Vec<Grade>> {
        self.inner.active_grades(grade_ids).await
    }

    async fn find_lesson(&self, key: &LessonKey) -> Result<Option<GeneratedLesson>> {
        let found = if self.plan.fail_pair == Some((key.subject_id, key.grade_id)) {
            Err(injected("lookup"))
        } else if self.plan.blind_lookup {
            Ok(None)
        } else {
            self.inner.find_lesson(key).await
        };
        self.pause().await;
        found
    }

    async fn lessons_by_ids(&self, lesson_ids: &[i64]) -> Result<Vec<GeneratedLesson>> {
        let lessons = self.inner.lessons_by_ids(lesson_ids).await;
        self.pause().await;
        lessons
    }

    async fn insert_lesson(&self, lesson: &NewGeneratedLesson) -> Result<Option<GeneratedLesson>> {
        let inserted = self.inner.insert_lesson(lesson).await?;
        if inserted.is_none() {
            self.insert_conflicts.fetch_add(1, Ordering::SeqCst);
        }
        Ok(inserted)
    }

    fn begin(&self) -> Box<dyn CurriculumUnitOfWork + '_> {
        Box::new(FailingUnitOfWork {
            inner: self.inner.begin(),
            plan: &self.plan,
        })
    }

    async fn questions_for_lesson(&self, lesson_id: i64) -> Result<Vec<LessonQuestion>> {
        self.inner.questions_for_lesson(lesson_id).await
    }

    async fn library_items_for_owner(
        &self,
        owner_role: UserRole,
        owner_id: i64,
    ) -> Result<Vec<LibraryItem>> {
        self.inner.library_items_for_owner(owner_role, owner_id).await
    }
}

pub struct FailingUnitOfWork<'a> {
    inner: Box<dyn CurriculumUnitOfWork + 'a>,
    plan: &'a FailurePlan,
}

#[async_trait]
impl CurriculumUnitOfWork for FailingUnitOfWork<'_> {
    async fn stage_questions(&mut self, questions: &[NewLessonQuestion]) -> Result<()> {
        self.inner.stage_questions(questions).await
    }

    async fn stage_lesson_published(
        &mut self,
        lesson_id: i64,
        published_at: NaiveDateTime,
    ) -> Result<()> {
        self.inner.stage_lesson_published(lesson_id, published_at).await
    }

    async fn stage_library_item(&mut self, item: NewLibraryItem) -> Result<()> {
        if self.plan.yield_calls {
            tokio::task::yield_now().await;
        }
        if self.plan.fail_library_owner == Some(item.owner_id) {
            return Err(injected("library item"));
        }
        self.inner.stage_library_item(item).await
    }

    fn pending_write_count(&self) -> usize {
        self.inner.pending_write_count()
    }

    async fn commit(&mut self) -> Result<()> {
        if self.plan.fail_commit {
            self.inner.rollback().await?;
            return Err(injected("commit"));
        }
        self.inner.commit().await
    }

    async fn rollback(&mut self) -> Result<()> {
        self.inner.rollback().await
    }
}
