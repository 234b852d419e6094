//! In-process [`CurriculumStore`].
//!
//! Mirrors the PostgreSQL store: sequential ids starting at 1, a uniqueness
//! guard on the lesson key, and per-run units of work whose writes are
//! validated and applied all-or-nothing on commit.

use super::{CurriculumStore, CurriculumUnitOfWork, PendingWrite};
use crate::constants::{LessonStatus, UserRole};
use crate::error::{CurriculumError, Result};
use crate::models::{
    GeneratedLesson, Grade, LessonKey, LessonQuestion, LibraryItem, NewGeneratedLesson, NewGrade,
    NewLessonQuestion, NewLibraryItem, NewSubject, Subject,
};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default)]
struct MemoryState {
    subjects: BTreeMap<i64, Subject>,
    grades: BTreeMap<i64, Grade>,
    lessons: BTreeMap<i64, GeneratedLesson>,
    lesson_keys: HashMap<LessonKey, i64>,
    questions: Vec<LessonQuestion>,
    library_items: Vec<LibraryItem>,
    last_subject_id: i64,
    last_grade_id: i64,
    last_lesson_id: i64,
    last_question_id: i64,
    last_library_item_id: i64,
}

impl MemoryState {
    fn check_pending(&self, pending: &[PendingWrite]) -> Result<()> {
        for write in pending {
            let lesson_id = match write {
                PendingWrite::Question(question) => question.lesson_id,
                PendingWrite::LessonPublished { lesson_id, .. } => *lesson_id,
                PendingWrite::LibraryItem(item) => item.lesson_id,
            };
            if !self.lessons.contains_key(&lesson_id) {
                return Err(CurriculumError::StoreError(format!(
                    "pending write references unknown lesson {lesson_id}"
                )));
            }
        }
        Ok(())
    }

    fn apply(&mut self, write: PendingWrite) {
        match write {
            PendingWrite::Question(question) => {
                self.last_question_id += 1;
                self.questions.push(LessonQuestion {
                    question_id: self.last_question_id,
                    lesson_id: question.lesson_id,
                    prompt: question.prompt,
                    choices: question.choices,
                    correct_choice_index: question.correct_choice_index,
                    explanation: question.explanation,
                    display_order: question.display_order,
                });
            }
            PendingWrite::LessonPublished {
                lesson_id,
                published_at,
            } => {
                if let Some(lesson) = self.lessons.get_mut(&lesson_id) {
                    lesson.status = LessonStatus::Published;
                    lesson.published_at = Some(published_at);
                }
            }
            PendingWrite::LibraryItem(item) => {
                self.last_library_item_id += 1;
                self.library_items.push(LibraryItem {
                    library_item_id: self.last_library_item_id,
                    lesson_id: item.lesson_id,
                    owner_role: item.owner_role,
                    owner_id: item.owner_id,
                    published_at: item.published_at,
                });
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCurriculumStore {
    state: RwLock<MemoryState>,
}

impl InMemoryCurriculumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a subject and return it with its assigned id
    pub fn add_subject(&self, new_subject: NewSubject) -> Subject {
        let mut state = self.state.write();
        state.last_subject_id += 1;
        let subject = Subject {
            subject_id: state.last_subject_id,
            name: new_subject.name,
            slug: new_subject.slug,
            is_active: new_subject.is_active,
        };
        state.subjects.insert(subject.subject_id, subject.clone());
        subject
    }

    /// Seed a grade and return it with its assigned id
    pub fn add_grade(&self, new_grade: NewGrade) -> Grade {
        let mut state = self.state.write();
        state.last_grade_id += 1;
        let grade = Grade {
            grade_id: state.last_grade_id,
            code: new_grade.code,
            display_name: new_grade.display_name,
            sort_order: new_grade.sort_order,
            is_active: new_grade.is_active,
        };
        state.grades.insert(grade.grade_id, grade.clone());
        grade
    }

    pub fn lesson_count(&self) -> usize {
        self.state.read().lessons.len()
    }

    pub fn question_count(&self) -> usize {
        self.state.read().questions.len()
    }

    pub fn library_item_count(&self) -> usize {
        self.state.read().library_items.len()
    }

    /// Snapshot of every persisted lesson in id order
    pub fn lessons(&self) -> Vec<GeneratedLesson> {
        self.state.read().lessons.values().cloned().collect()
    }

    pub fn library_items(&self) -> Vec<LibraryItem> {
        self.state.read().library_items.clone()
    }
}

fn filter_ids<T>(rows: impl Iterator<Item = T>, id_of: impl Fn(&T) -> i64, ids: Option<&[i64]>) -> Vec<T> {
    rows.filter(|row| ids.map_or(true, |ids| ids.contains(&id_of(row))))
        .collect()
}

#[async_trait]
impl CurriculumStore for InMemoryCurriculumStore {
    async fn active_subjects(&self, subject_ids: Option<&[i64]>) -> Result<Vec<Subject>> {
        let state = self.state.read();
        let mut subjects = filter_ids(
            state.subjects.values().filter(|s| s.is_active).cloned(),
            |s| s.subject_id,
            subject_ids,
        );
        subjects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(subjects)
    }

    async fn active_grades(&self, grade_ids: Option<&[i64]>) -> Result<Vec<Grade>> {
        let state = self.state.read();
        let mut grades = filter_ids(
            state.grades.values().filter(|g| g.is_active).cloned(),
            |g| g.grade_id,
            grade_ids,
        );
        grades.sort_by_key(|g| g.sort_order);
        Ok(grades)
    }

    async fn find_lesson(&self, key: &LessonKey) -> Result<Option<GeneratedLesson>> {
        let state = self.state.read();
        Ok(state
            .lesson_keys
            .get(key)
            .and_then(|id| state.lessons.get(id))
            .cloned())
    }

    async fn lessons_by_ids(&self, lesson_ids: &[i64]) -> Result<Vec<GeneratedLesson>> {
        let state = self.state.read();
        Ok(state
            .lessons
            .values()
            .filter(|lesson| lesson_ids.contains(&lesson.lesson_id))
            .cloned()
            .collect())
    }

    async fn insert_lesson(&self, lesson: &NewGeneratedLesson) -> Result<Option<GeneratedLesson>> {
        let mut state = self.state.write();
        let key = lesson.key();
        if state.lesson_keys.contains_key(&key) {
            return Ok(None);
        }

        state.last_lesson_id += 1;
        let stored = GeneratedLesson::from_new(
            state.last_lesson_id,
            lesson.clone(),
            Utc::now().naive_utc(),
        );
        state.lesson_keys.insert(key, stored.lesson_id);
        state.lessons.insert(stored.lesson_id, stored.clone());
        Ok(Some(stored))
    }

    fn begin(&self) -> Box<dyn CurriculumUnitOfWork + '_> {
        Box::new(MemoryUnitOfWork {
            store: self,
            pending: Vec::new(),
        })
    }

    async fn questions_for_lesson(&self, lesson_id: i64) -> Result<Vec<LessonQuestion>> {
        let state = self.state.read();
        let mut questions: Vec<_> = state
            .questions
            .iter()
            .filter(|q| q.lesson_id == lesson_id)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.display_order);
        Ok(questions)
    }

    async fn library_items_for_owner(
        &self,
        owner_role: UserRole,
        owner_id: i64,
    ) -> Result<Vec<LibraryItem>> {
        let state = self.state.read();
        let mut items: Vec<_> = state
            .library_items
            .iter()
            .filter(|item| item.owner_role == owner_role && item.owner_id == owner_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then(b.library_item_id.cmp(&a.library_item_id))
        });
        Ok(items)
    }
}

/// Writes staged by one run against an [`InMemoryCurriculumStore`]
#[derive(Debug)]
pub struct MemoryUnitOfWork<'a> {
    store: &'a InMemoryCurriculumStore,
    pending: Vec<PendingWrite>,
}

#[async_trait]
impl CurriculumUnitOfWork for MemoryUnitOfWork<'_> {
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
        let mut state = self.store.state.write();
        state.check_pending(&pending)?;
        for write in pending {
            state.apply(write);
        }
        Ok(())
    }

    async fn rollback(&mut self) -> Result<()> {
        self.pending.clear();
        Ok(())
    }
}
