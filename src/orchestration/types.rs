//! # Orchestration Types
//!
//! Requests and results exchanged with the generation and publishing
//! pipeline. Results never carry a separate status flag: a non-empty
//! `error_messages` list is the failure signal.

use crate::constants::UserRole;
use crate::models::GeneratedLesson;
use serde::{Deserialize, Serialize};

/// Input to [`LessonGenerator::generate_lessons`](super::LessonGenerator::generate_lessons)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Restrict to these subjects; `None` or empty means all active subjects
    #[serde(default)]
    pub subject_ids: Option<Vec<i64>>,
    /// Restrict to these grades; `None` or empty means all active grades
    #[serde(default)]
    pub grade_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub dry_run: bool,
    pub created_by_id: i64,
    pub created_by_role: UserRole,
}

impl GenerationRequest {
    /// Request covering every active subject and grade
    pub fn all(created_by_id: i64, created_by_role: UserRole) -> Self {
        Self {
            subject_ids: None,
            grade_ids: None,
            dry_run: false,
            created_by_id,
            created_by_role,
        }
    }

    pub fn with_subjects(mut self, subject_ids: Vec<i64>) -> Self {
        self.subject_ids = Some(subject_ids);
        self
    }

    pub fn with_grades(mut self, grade_ids: Vec<i64>) -> Self {
        self.grade_ids = Some(grade_ids);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub lessons_created: usize,
    pub questions_created: usize,
    /// Lessons created by this run (previews with id 0 in dry-run mode)
    pub generated_lessons: Vec<GeneratedLesson>,
    pub error_messages: Vec<String>,
}

impl GenerationResult {
    pub fn has_errors(&self) -> bool {
        !self.error_messages.is_empty()
    }

    pub(crate) fn record_lesson(&mut self, lesson: GeneratedLesson) {
        self.lessons_created += 1;
        self.questions_created += lesson.questions.len();
        self.generated_lessons.push(lesson);
    }
}

/// Input to [`LessonPublisher::publish_lessons`](super::LessonPublisher::publish_lessons)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    pub lesson_ids: Vec<i64>,
    pub target_library: UserRole,
    pub owner_ids: Vec<i64>,
}

impl PublishRequest {
    pub fn new(lesson_ids: Vec<i64>, target_library: UserRole, owner_ids: Vec<i64>) -> Self {
        Self {
            lesson_ids,
            target_library,
            owner_ids,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResult {
    pub lessons_published: usize,
    pub library_items_created: usize,
    pub published_lesson_ids: Vec<i64>,
    pub error_messages: Vec<String>,
}

impl PublishResult {
    pub fn has_errors(&self) -> bool {
        !self.error_messages.is_empty()
    }
}
