use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// Subject reference data, used by the pipeline only for strategy dispatch
/// Maps to `curriculum_subjects` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Subject {
    pub subject_id: i64,
    pub name: String,
    /// URL-safe identifier, e.g. `mathematics`
    pub slug: String,
    pub is_active: bool,
}

/// New Subject for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubject {
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

impl NewSubject {
    pub fn active(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            is_active: true,
        }
    }
}

impl Subject {
    /// Create a new subject
    pub async fn create(pool: &PgPool, new_subject: NewSubject) -> Result<Subject, sqlx::Error> {
        sqlx::query_as::<_, Subject>(
            r#"
            INSERT INTO curriculum_subjects (name, slug, is_active)
            VALUES ($1, $2, $3)
            RETURNING subject_id, name, slug, is_active
            "#,
        )
        .bind(new_subject.name)
        .bind(new_subject.slug)
        .bind(new_subject.is_active)
        .fetch_one(pool)
        .await
    }

    /// List active subjects ordered by name, optionally restricted to an id set
    pub async fn list_active(
        pool: &PgPool,
        subject_ids: Option<&[i64]>,
    ) -> Result<Vec<Subject>, sqlx::Error> {
        sqlx::query_as::<_, Subject>(
            r#"
            SELECT subject_id, name, slug, is_active
            FROM curriculum_subjects
            WHERE is_active = TRUE
              AND ($1::BIGINT[] IS NULL OR subject_id = ANY($1))
            ORDER BY name
            "#,
        )
        .bind(subject_ids.map(<[i64]>::to_vec))
        .fetch_all(pool)
        .await
    }
}
