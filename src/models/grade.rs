use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// Grade level used when a grade code cannot be parsed
const UNPARSABLE_GRADE_LEVEL: i32 = 1;

/// Grade reference data
/// Maps to `curriculum_grades` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Grade {
    pub grade_id: i64,
    /// Short code such as `K`, `3` or `10`
    pub code: String,
    pub display_name: String,
    pub sort_order: i32,
    pub is_active: bool,
}

/// New Grade for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGrade {
    pub code: String,
    pub display_name: String,
    pub sort_order: i32,
    pub is_active: bool,
}

impl NewGrade {
    pub fn active(code: impl Into<String>, display_name: impl Into<String>, sort_order: i32) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            sort_order,
            is_active: true,
        }
    }
}

/// Numeric grade level of a grade code.
///
/// `K` maps to 0, numeric codes are parsed directly and anything else
/// falls back to 1.
pub fn grade_level(code: &str) -> i32 {
    let code = code.trim();
    if code.eq_ignore_ascii_case("K") {
        return 0;
    }
    code.parse().unwrap_or(UNPARSABLE_GRADE_LEVEL)
}

impl Grade {
    /// Numeric level derived from [`Grade::code`]
    pub fn level(&self) -> i32 {
        grade_level(&self.code)
    }

    /// Create a new grade
    pub async fn create(pool: &PgPool, new_grade: NewGrade) -> Result<Grade, sqlx::Error> {
        sqlx::query_as::<_, Grade>(
            r#"
            INSERT INTO curriculum_grades (code, display_name, sort_order, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING grade_id, code, display_name, sort_order, is_active
            "#,
        )
        .bind(new_grade.code)
        .bind(new_grade.display_name)
        .bind(new_grade.sort_order)
        .bind(new_grade.is_active)
        .fetch_one(pool)
        .await
    }

    /// List active grades by sort order, optionally restricted to an id set
    pub async fn list_active(
        pool: &PgPool,
        grade_ids: Option<&[i64]>,
    ) -> Result<Vec<Grade>, sqlx::Error> {
        sqlx::query_as::<_, Grade>(
            r#"
            SELECT grade_id, code, display_name, sort_order, is_active
            FROM curriculum_grades
            WHERE is_active = TRUE
              AND ($1::BIGINT[] IS NULL OR grade_id = ANY($1))
            ORDER BY sort_order
            "#,
        )
        .bind(grade_ids.map(<[i64]>::to_vec))
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_level_parsing() {
        assert_eq!(grade_level("K"), 0);
        assert_eq!(grade_level("k"), 0);
        assert_eq!(grade_level("3"), 3);
        assert_eq!(grade_level(" 10 "), 10);
        assert_eq!(grade_level("Pre-K"), 1);
        assert_eq!(grade_level(""), 1);
    }
}
