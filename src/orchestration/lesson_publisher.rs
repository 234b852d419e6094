//! # Lesson Publisher
//!
//! Marks lessons published and fans each one out into library items, one
//! per owner. All writes are staged on a unit of work owned by the call and
//! committed as a single batch.

use super::types::{PublishRequest, PublishResult};
use crate::constants::messages;
use crate::error::Result;
use crate::logging::{log_error, log_publish_operation};
use crate::models::{GeneratedLesson, NewLibraryItem};
use crate::store::{CurriculumStore, CurriculumUnitOfWork};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct LessonPublisher {
    store: Arc<dyn CurriculumStore>,
}

impl LessonPublisher {
    pub fn new(store: Arc<dyn CurriculumStore>) -> Self {
        Self { store }
    }

    /// Publish the requested lessons into `target_library` for every owner.
    ///
    /// Unknown lesson ids are ignored. Already-published lessons are
    /// re-stamped and receive a fresh set of library items.
    #[instrument(skip(self, request), fields(library = %request.target_library))]
    pub async fn publish_lessons(&self, request: PublishRequest) -> PublishResult {
        let mut result = PublishResult::default();
        if let Err(e) = self.run(&request, &mut result).await {
            log_error("lesson_publisher", "publish_lessons", &e.to_string(), None);
            result
                .error_messages
                .push(format!("{}: {e}", messages::PUBLISH_FAILED_PREFIX));
        }

        info!(
            lessons_published = result.lessons_published,
            library_items_created = result.library_items_created,
            errors = result.error_messages.len(),
            "Lesson publishing finished"
        );
        result
    }

    async fn run(&self, request: &PublishRequest, result: &mut PublishResult) -> Result<()> {
        let lessons = self.store.lessons_by_ids(&request.lesson_ids).await?;
        let mut unit = self.store.begin();

        if let Err(e) = Self::stage(request, &lessons, unit.as_mut(), result).await {
            if let Err(rollback_error) = unit.rollback().await {
                warn!(error = %rollback_error, "Failed to discard staged writes");
            }
            return Err(e);
        }

        unit.commit().await
    }

    async fn stage(
        request: &PublishRequest,
        lessons: &[GeneratedLesson],
        unit: &mut (dyn CurriculumUnitOfWork + '_),
        result: &mut PublishResult,
    ) -> Result<()> {
        let published_at = Utc::now().naive_utc();
        let library = request.target_library.to_string();

        for lesson in lessons {
            unit.stage_lesson_published(lesson.lesson_id, published_at)
                .await?;
            result.lessons_published += 1;
            result.published_lesson_ids.push(lesson.lesson_id);

            for &owner_id in &request.owner_ids {
                unit.stage_library_item(NewLibraryItem {
                    lesson_id: lesson.lesson_id,
                    owner_role: request.target_library,
                    owner_id,
                    published_at,
                })
                .await?;
                result.library_items_created += 1;
            }

            log_publish_operation(
                "publish_lesson",
                Some(lesson.lesson_id),
                Some(&library),
                if lesson.status.is_published() { "republished" } else { "published" },
                None,
            );
        }
        Ok(())
    }
}
