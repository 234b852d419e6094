use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgConnection, PgPool};

/// A multiple-choice question belonging to a generated lesson
/// Maps to `curriculum_lesson_questions` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LessonQuestion {
    pub question_id: i64,
    pub lesson_id: i64,
    pub prompt: String,
    /// Answer choices, persisted as a JSON array
    #[sqlx(json)]
    pub choices: Vec<String>,
    /// Zero-based index into `choices`
    pub correct_choice_index: i32,
    pub explanation: Option<String>,
    /// 1-based position within the lesson
    pub display_order: i32,
}

/// Question content as produced by a content strategy, before it has a row id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLessonQuestion {
    pub lesson_id: i64,
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_choice_index: i32,
    pub explanation: Option<String>,
    pub display_order: i32,
}

impl NewLessonQuestion {
    /// Text of the correct answer, if the index is in range
    pub fn correct_choice(&self) -> Option<&str> {
        usize::try_from(self.correct_choice_index)
            .ok()
            .and_then(|index| self.choices.get(index))
            .map(String::as_str)
    }
}

impl LessonQuestion {
    /// Insert a question on an open connection or transaction
    pub async fn insert(
        conn: &mut PgConnection,
        question: &NewLessonQuestion,
    ) -> Result<LessonQuestion, sqlx::Error> {
        sqlx::query_as::<_, LessonQuestion>(
            r#"
            INSERT INTO curriculum_lesson_questions
                (lesson_id, prompt, choices, correct_choice_index, explanation, display_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING question_id, lesson_id, prompt, choices, correct_choice_index,
                      explanation, display_order
            "#,
        )
        .bind(question.lesson_id)
        .bind(&question.prompt)
        .bind(Json(&question.choices))
        .bind(question.correct_choice_index)
        .bind(&question.explanation)
        .bind(question.display_order)
        .fetch_one(conn)
        .await
    }

    /// Questions of a lesson in display order
    pub async fn list_for_lesson(
        pool: &PgPool,
        lesson_id: i64,
    ) -> Result<Vec<LessonQuestion>, sqlx::Error> {
        sqlx::query_as::<_, LessonQuestion>(
            r#"
            SELECT question_id, lesson_id, prompt, choices, correct_choice_index,
                   explanation, display_order
            FROM curriculum_lesson_questions
            WHERE lesson_id = $1
            ORDER BY display_order
            "#,
        )
        .bind(lesson_id)
        .fetch_all(pool)
        .await
    }

    /// Count of persisted questions
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM curriculum_lesson_questions")
            .fetch_one(pool)
            .await
    }
}
