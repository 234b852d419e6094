//! # Lesson Generator
//!
//! Drives the subject × grade × difficulty matrix.
//!
//! ## Flow
//!
//! ```text
//! resolve universe ─▶ for subject (by name) ─▶ for grade (by sort order) ─▶ A, B
//!                                                   │
//!        existing key? ── yes ─▶ skip               │
//!                      └─ no ──▶ insert lesson ─▶ questions(lesson_id) ─▶ stage
//!                                                   │
//!                                          commit once at the end
//! ```
//!
//! A failure inside one (subject, grade) pair is recorded and the run moves
//! on to the next pair. Only universe resolution or the final commit can
//! abort a run, and even then the partial result is returned. Question
//! writes are staged on a unit of work owned by the run, so concurrent runs
//! on the same store cannot flush or discard each other's writes.

use super::question_generator::QuestionGenerator;
use super::types::{GenerationRequest, GenerationResult};
use crate::config::GenerationConfig;
use crate::constants::{messages, Difficulty};
use crate::error::Result;
use crate::logging::{log_error, log_generation_operation};
use crate::models::{Grade, LessonKey, NewGeneratedLesson, Subject};
use crate::store::{CurriculumStore, CurriculumUnitOfWork};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

pub struct LessonGenerator {
    store: Arc<dyn CurriculumStore>,
    generator: QuestionGenerator,
    /// Serializes runs within this process when present
    run_lock: Option<Mutex<()>>,
}

impl LessonGenerator {
    pub fn new(store: Arc<dyn CurriculumStore>, generator: QuestionGenerator) -> Self {
        Self::with_config(store, generator, &GenerationConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn CurriculumStore>,
        generator: QuestionGenerator,
        config: &GenerationConfig,
    ) -> Self {
        Self {
            store,
            generator,
            run_lock: config.serialize_runs.then(|| Mutex::new(())),
        }
    }

    pub fn question_generator(&self) -> &QuestionGenerator {
        &self.generator
    }

    /// Generate lessons for every (subject, grade, difficulty) triple in the
    /// requested universe that does not already have one.
    ///
    /// Never fails: errors are reported through
    /// [`GenerationResult::error_messages`].
    #[instrument(skip(self, request), fields(dry_run = request.dry_run))]
    pub async fn generate_lessons(&self, request: GenerationRequest) -> GenerationResult {
        let _guard = match &self.run_lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };

        let mut result = GenerationResult::default();
        if let Err(e) = self.run(&request, &mut result).await {
            log_error("lesson_generator", "generate_lessons", &e.to_string(), None);
            let mut message = format!("{}: {e}", messages::GENERATION_FAILED_PREFIX);
            // Lessons were inserted immediately but their questions were lost
            if !request.dry_run && !result.generated_lessons.is_empty() {
                let ids: Vec<String> = result
                    .generated_lessons
                    .iter()
                    .map(|lesson| lesson.lesson_id.to_string())
                    .collect();
                message.push_str(&format!(
                    " ({}: {})",
                    messages::LESSONS_WITHOUT_QUESTIONS,
                    ids.join(", ")
                ));
                result.questions_created = 0;
            }
            result.error_messages.push(message);
        }

        info!(
            lessons_created = result.lessons_created,
            questions_created = result.questions_created,
            errors = result.error_messages.len(),
            "Lesson generation finished"
        );
        result
    }

    async fn run(&self, request: &GenerationRequest, result: &mut GenerationResult) -> Result<()> {
        let subjects = self
            .store
            .active_subjects(id_filter(&request.subject_ids))
            .await?;
        let grades = self.store.active_grades(id_filter(&request.grade_ids)).await?;

        if subjects.is_empty() || grades.is_empty() {
            result
                .error_messages
                .push(messages::EMPTY_UNIVERSE.to_string());
            return Ok(());
        }

        debug!(
            subjects = subjects.len(),
            grades = grades.len(),
            "Resolved generation universe"
        );

        let mut unit = self.store.begin();
        for subject in &subjects {
            for grade in &grades {
                if let Err(e) = self
                    .generate_pair(subject, grade, request, unit.as_mut(), result)
                    .await
                {
                    let message =
                        messages::pair_failure(&subject.name, &grade.display_name, &e.to_string());
                    warn!(
                        subject_slug = %subject.slug,
                        grade_code = %grade.code,
                        error = %e,
                        "Lesson generation failed for pair"
                    );
                    result.error_messages.push(message);
                }
            }
        }

        if !request.dry_run {
            unit.commit().await?;
        }
        Ok(())
    }

    async fn generate_pair(
        &self,
        subject: &Subject,
        grade: &Grade,
        request: &GenerationRequest,
        unit: &mut (dyn CurriculumUnitOfWork + '_),
        result: &mut GenerationResult,
    ) -> Result<()> {
        for difficulty in Difficulty::all() {
            let key = LessonKey::new(subject.subject_id, grade.grade_id, difficulty);
            if self.store.find_lesson(&key).await?.is_some() {
                debug!(key = %key, "Lesson already exists, skipping");
                continue;
            }

            let content = self
                .generator
                .produce_lesson_content(subject, grade, difficulty);
            let new_lesson = NewGeneratedLesson {
                subject_id: subject.subject_id,
                grade_id: grade.grade_id,
                title: content.title,
                description: content.description,
                difficulty,
                created_by_id: request.created_by_id,
                created_by_role: request.created_by_role,
            };

            let lesson = if request.dry_run {
                let mut preview = new_lesson.into_preview(Utc::now().naive_utc());
                preview.questions =
                    self.generator
                        .produce_questions(subject, grade, difficulty, preview.lesson_id);
                preview
            } else {
                // Concurrent writer got there first
                let Some(mut lesson) = self.store.insert_lesson(&new_lesson).await? else {
                    debug!(key = %key, "Lesson inserted concurrently, skipping");
                    continue;
                };
                let questions =
                    self.generator
                        .produce_questions(subject, grade, difficulty, lesson.lesson_id);
                unit.stage_questions(&questions).await?;
                lesson.questions = questions;
                lesson
            };

            log_generation_operation(
                "generate_lesson",
                Some(&subject.slug),
                Some(&grade.code),
                lesson.is_persisted().then_some(lesson.lesson_id),
                if request.dry_run { "previewed" } else { "created" },
                Some(&lesson.title),
            );
            result.record_lesson(lesson);
        }
        Ok(())
    }
}

/// An empty id list means "no filter"
fn id_filter(ids: &Option<Vec<i64>>) -> Option<&[i64]> {
    ids.as_deref().filter(|ids| !ids.is_empty())
}
