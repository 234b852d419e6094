//! # Curriculum Constants
//!
//! Enumerations and fixed values shared by the content strategies, the
//! persistence layer and the orchestration pipeline.
//!
//! Enum values are persisted as short strings. Each enum implements
//! `Display`/`FromStr` for the stored form and `TryFrom<String>` so that
//! `sqlx::FromRow` can decode the column directly.

use crate::error::CurriculumError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of questions in every pipeline-generated lesson
pub const QUESTIONS_PER_LESSON: usize = 5;

/// Number of answer choices in every hand-authored question
pub const CHOICES_PER_QUESTION: usize = 4;

/// Result messages reported by the pipeline operations
pub mod messages {
    pub const EMPTY_UNIVERSE: &str =
        "No active subjects or grades found matching the specified criteria";
    pub const GENERATION_FAILED_PREFIX: &str = "An error occurred during lesson generation";
    pub const PUBLISH_FAILED_PREFIX: &str = "An error occurred during lesson publishing";
    /// Appended to a failed generation run listing lessons saved without questions
    pub const LESSONS_WITHOUT_QUESTIONS: &str = "lessons saved without questions";

    /// Message recorded when one (subject, grade) pair fails
    pub fn pair_failure(subject_name: &str, grade_display_name: &str, error: &str) -> String {
        format!("Error generating lessons for {subject_name} - {grade_display_name}: {error}")
    }
}

/// Difficulty tag of a generated lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// Easier content
    A,
    /// Moderate content
    B,
}

impl Difficulty {
    /// Difficulties in the order the generator produces them
    pub const fn all() -> [Difficulty; 2] {
        [Difficulty::A, Difficulty::B]
    }

    /// Title prefix used for lessons at this difficulty
    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "Basic",
            Self::B => "Intermediate",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            other => Err(CurriculumError::invalid_enum("difficulty", other)),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = CurriculumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Lifecycle status of a generated lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    /// Created by the generator, not yet visible in any library
    Draft,
    /// Promoted by the publisher
    Published,
}

impl LessonStatus {
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
        }
    }
}

impl std::str::FromStr for LessonStatus {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            _ => Err(CurriculumError::invalid_enum("lesson status", s)),
        }
    }
}

impl TryFrom<String> for LessonStatus {
    type Error = CurriculumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Platform role, used both for lesson creators and for library owners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
    Parent,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Teacher => write!(f, "teacher"),
            Self::Student => write!(f, "student"),
            Self::Parent => write!(f, "parent"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            "parent" => Ok(Self::Parent),
            _ => Err(CurriculumError::invalid_enum("role", s)),
        }
    }
}

impl TryFrom<String> for UserRole {
    type Error = CurriculumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
