//! Facade that routes content requests to the strategy registered for a
//! subject's slug.

use crate::constants::Difficulty;
use crate::content::LessonContent;
use crate::models::{Grade, NewLessonQuestion, Subject};
use crate::registry::StrategyRegistry;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    registry: Arc<StrategyRegistry>,
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new(Arc::new(StrategyRegistry::with_default_strategies()))
    }
}

impl QuestionGenerator {
    pub fn new(registry: Arc<StrategyRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<StrategyRegistry> {
        &self.registry
    }

    pub fn produce_lesson_content(
        &self,
        subject: &Subject,
        grade: &Grade,
        difficulty: Difficulty,
    ) -> LessonContent {
        self.registry
            .resolve(&subject.slug)
            .lesson_content(subject, grade, difficulty)
    }

    pub fn produce_questions(
        &self,
        subject: &Subject,
        grade: &Grade,
        difficulty: Difficulty,
        lesson_id: i64,
    ) -> Vec<NewLessonQuestion> {
        self.registry
            .resolve(&subject.slug)
            .questions(subject, grade, difficulty, lesson_id)
    }
}
