use super::{lesson_title, ContentStrategy, LessonContent};
use crate::constants::{Difficulty, QUESTIONS_PER_LESSON};
use crate::models::{Grade, NewLessonQuestion, Subject};

/// Registry key of the fallback strategy
pub const FALLBACK_SLUG: &str = "default";

const PLACEHOLDER_CHOICES: [&str; 4] = ["Option A", "Option B", "Option C", "Option D"];

/// Generic content for subjects without a dedicated strategy.
/// Ignores grade band and difficulty when building questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackStrategy;

impl ContentStrategy for FallbackStrategy {
    fn slug(&self) -> &str {
        FALLBACK_SLUG
    }

    fn lesson_content(
        &self,
        subject: &Subject,
        grade: &Grade,
        difficulty: Difficulty,
    ) -> LessonContent {
        LessonContent {
            title: lesson_title(subject, grade, difficulty),
            description: format!(
                "{} {} lesson for {} covering core concepts.",
                difficulty.label(),
                subject.name,
                grade.display_name
            ),
        }
    }

    fn questions(
        &self,
        subject: &Subject,
        grade: &Grade,
        _difficulty: Difficulty,
        lesson_id: i64,
    ) -> Vec<NewLessonQuestion> {
        (1..=QUESTIONS_PER_LESSON as i32)
            .map(|order| NewLessonQuestion {
                lesson_id,
                prompt: format!(
                    "{} practice question {} for {}",
                    subject.name, order, grade.display_name
                ),
                choices: PLACEHOLDER_CHOICES.iter().map(|c| c.to_string()).collect(),
                correct_choice_index: 0,
                explanation: Some(format!(
                    "Review the {} lesson material to check this answer.",
                    subject.name
                )),
                display_order: order,
            })
            .collect()
    }
}
