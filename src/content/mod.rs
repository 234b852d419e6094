//! # Subject Content Strategies
//!
//! Rule-based lesson content for each subject. A strategy turns a
//! (subject, grade, difficulty) triple into lesson metadata and a fixed set
//! of [`QUESTIONS_PER_LESSON`] multiple-choice questions.
//!
//! ## Architecture
//!
//! ```text
//! ContentStrategy (trait)
//! ├── BandedStrategy      (static tables per subject, keyed by GradeBand × Difficulty)
//! │   ├── language-arts
//! │   ├── mathematics
//! │   ├── science
//! │   └── social-studies
//! └── FallbackStrategy    (generic placeholders for unmapped subjects)
//! ```
//!
//! Strategies are pure: the same inputs always yield identical output.

pub mod band;
pub mod banded;
pub mod fallback;
pub mod language_arts;
pub mod mathematics;
pub mod science;
pub mod social_studies;

pub use band::GradeBand;
pub use banded::{BandedStrategy, SubjectTables};
pub use fallback::FallbackStrategy;

use crate::constants::{Difficulty, CHOICES_PER_QUESTION, QUESTIONS_PER_LESSON};
use crate::models::{Grade, NewLessonQuestion, Subject};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Title and description of a lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    pub title: String,
    pub description: String,
}

/// Content generation capability for one subject
pub trait ContentStrategy: Send + Sync + Debug {
    /// Subject slug this strategy is registered under
    fn slug(&self) -> &str;

    fn lesson_content(&self, subject: &Subject, grade: &Grade, difficulty: Difficulty)
        -> LessonContent;

    /// Exactly [`QUESTIONS_PER_LESSON`] questions, stamped with `lesson_id`
    /// and ordered 1..=5
    fn questions(
        &self,
        subject: &Subject,
        grade: &Grade,
        difficulty: Difficulty,
        lesson_id: i64,
    ) -> Vec<NewLessonQuestion>;
}

/// `"{Basic|Intermediate} {subject} - {grade}"`
pub fn lesson_title(subject: &Subject, grade: &Grade, difficulty: Difficulty) -> String {
    format!(
        "{} {} - {}",
        difficulty.label(),
        subject.name,
        grade.display_name
    )
}

/// A hand-authored question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTemplate {
    pub prompt: &'static str,
    pub choices: [&'static str; CHOICES_PER_QUESTION],
    pub correct_choice: u8,
    pub explanation: &'static str,
}

pub type QuestionSet = [QuestionTemplate; QUESTIONS_PER_LESSON];

/// Shorthand used by the static subject tables
pub(crate) const fn q(
    prompt: &'static str,
    choices: [&'static str; CHOICES_PER_QUESTION],
    correct_choice: u8,
    explanation: &'static str,
) -> QuestionTemplate {
    QuestionTemplate {
        prompt,
        choices,
        correct_choice,
        explanation,
    }
}

impl QuestionTemplate {
    pub fn to_question(&self, lesson_id: i64, display_order: i32) -> NewLessonQuestion {
        NewLessonQuestion {
            lesson_id,
            prompt: self.prompt.to_string(),
            choices: self.choices.iter().map(|c| c.to_string()).collect(),
            correct_choice_index: i32::from(self.correct_choice),
            explanation: Some(self.explanation.to_string()),
            display_order,
        }
    }
}

/// Stamp a question set with a lesson id and 1-based display order
pub(crate) fn stamp_questions(set: &QuestionSet, lesson_id: i64) -> Vec<NewLessonQuestion> {
    (1..)
        .zip(set.iter())
        .map(|(order, template)| template.to_question(lesson_id, order))
        .collect()
}
