//! # Generated Lesson Model
//!
//! Lessons produced by the generation pipeline.
//!
//! ## Database Schema
//!
//! Maps to `curriculum_generated_lessons` table. The
//! `(subject_id, grade_id, difficulty)` triple is the idempotency key and is
//! guarded by a UNIQUE constraint:
//! ```sql
//! CONSTRAINT uq_generated_lessons_key UNIQUE (subject_id, grade_id, difficulty)
//! ```
//!
//! A lesson is inserted once in `draft` status and updated exactly once more,
//! when it is published.

use crate::constants::{Difficulty, LessonStatus, UserRole};
use crate::models::lesson_question::NewLessonQuestion;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection, PgPool};

/// Idempotency key of a generated lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LessonKey {
    pub subject_id: i64,
    pub grade_id: i64,
    pub difficulty: Difficulty,
}

impl LessonKey {
    pub fn new(subject_id: i64, grade_id: i64, difficulty: Difficulty) -> Self {
        Self {
            subject_id,
            grade_id,
            difficulty,
        }
    }
}

impl std::fmt::Display for LessonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.subject_id, self.grade_id, self.difficulty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GeneratedLesson {
    /// Row id; `0` for dry-run previews that were never persisted
    pub lesson_id: i64,
    pub subject_id: i64,
    pub grade_id: i64,
    pub title: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub difficulty: Difficulty,
    #[sqlx(try_from = "String")]
    pub status: LessonStatus,
    pub created_by_id: i64,
    #[sqlx(try_from = "String")]
    pub created_by_role: UserRole,
    pub created_at: NaiveDateTime,
    pub published_at: Option<NaiveDateTime>,
    /// Question content generated for this lesson during the current run.
    /// Not loaded from storage; use `LessonQuestion::list_for_lesson` for that.
    #[sqlx(skip)]
    #[serde(default)]
    pub questions: Vec<NewLessonQuestion>,
}

/// New GeneratedLesson for creation (without generated fields)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGeneratedLesson {
    pub subject_id: i64,
    pub grade_id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub created_by_id: i64,
    pub created_by_role: UserRole,
}

impl NewGeneratedLesson {
    pub fn key(&self) -> LessonKey {
        LessonKey::new(self.subject_id, self.grade_id, self.difficulty)
    }

    /// Materialize the lesson without persisting it
    pub fn into_preview(self, created_at: NaiveDateTime) -> GeneratedLesson {
        GeneratedLesson::from_new(0, self, created_at)
    }
}

impl GeneratedLesson {
    /// Build a draft lesson record from its insert struct and a storage id
    pub fn from_new(lesson_id: i64, new_lesson: NewGeneratedLesson, created_at: NaiveDateTime) -> Self {
        Self {
            lesson_id,
            subject_id: new_lesson.subject_id,
            grade_id: new_lesson.grade_id,
            title: new_lesson.title,
            description: new_lesson.description,
            difficulty: new_lesson.difficulty,
            status: LessonStatus::Draft,
            created_by_id: new_lesson.created_by_id,
            created_by_role: new_lesson.created_by_role,
            created_at,
            published_at: None,
            questions: Vec::new(),
        }
    }

    pub fn key(&self) -> LessonKey {
        LessonKey::new(self.subject_id, self.grade_id, self.difficulty)
    }

    /// Whether the lesson has been assigned a storage id
    pub fn is_persisted(&self) -> bool {
        self.lesson_id > 0
    }

    /// Insert a draft lesson unless one already exists for its key.
    ///
    /// Returns `None` when the UNIQUE constraint on the key rejected the row.
    pub async fn insert_if_absent(
        pool: &PgPool,
        new_lesson: &NewGeneratedLesson,
    ) -> Result<Option<GeneratedLesson>, sqlx::Error> {
        sqlx::query_as::<_, GeneratedLesson>(
            r#"
            INSERT INTO curriculum_generated_lessons
                (subject_id, grade_id, title, description, difficulty, status,
                 created_by_id, created_by_role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            ON CONFLICT (subject_id, grade_id, difficulty) DO NOTHING
            RETURNING lesson_id, subject_id, grade_id, title, description, difficulty, status,
                      created_by_id, created_by_role, created_at, published_at
            "#,
        )
        .bind(new_lesson.subject_id)
        .bind(new_lesson.grade_id)
        .bind(&new_lesson.title)
        .bind(&new_lesson.description)
        .bind(new_lesson.difficulty.to_string())
        .bind(LessonStatus::Draft.to_string())
        .bind(new_lesson.created_by_id)
        .bind(new_lesson.created_by_role.to_string())
        .fetch_optional(pool)
        .await
    }

    /// Find the lesson for an idempotency key
    pub async fn find_by_key(
        pool: &PgPool,
        key: &LessonKey,
    ) -> Result<Option<GeneratedLesson>, sqlx::Error> {
        sqlx::query_as::<_, GeneratedLesson>(
            r#"
            SELECT lesson_id, subject_id, grade_id, title, description, difficulty, status,
                   created_by_id, created_by_role, created_at, published_at
            FROM curriculum_generated_lessons
            WHERE subject_id = $1 AND grade_id = $2 AND difficulty = $3
            "#,
        )
        .bind(key.subject_id)
        .bind(key.grade_id)
        .bind(key.difficulty.to_string())
        .fetch_optional(pool)
        .await
    }

    /// Fetch every lesson whose id is in `lesson_ids`; unknown ids are ignored
    pub async fn find_by_ids(
        pool: &PgPool,
        lesson_ids: &[i64],
    ) -> Result<Vec<GeneratedLesson>, sqlx::Error> {
        sqlx::query_as::<_, GeneratedLesson>(
            r#"
            SELECT lesson_id, subject_id, grade_id, title, description, difficulty, status,
                   created_by_id, created_by_role, created_at, published_at
            FROM curriculum_generated_lessons
            WHERE lesson_id = ANY($1)
            ORDER BY lesson_id
            "#,
        )
        .bind(lesson_ids.to_vec())
        .fetch_all(pool)
        .await
    }

    /// Mark a lesson published on an open connection or transaction
    pub async fn mark_published(
        conn: &mut PgConnection,
        lesson_id: i64,
        published_at: NaiveDateTime,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE curriculum_generated_lessons
            SET status = $2, published_at = $3
            WHERE lesson_id = $1
            "#,
        )
        .bind(lesson_id)
        .bind(LessonStatus::Published.to_string())
        .bind(published_at)
        .execute(conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count of persisted lessons
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM curriculum_generated_lessons")
            .fetch_one(pool)
            .await
    }
}
