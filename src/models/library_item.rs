use crate::constants::UserRole;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection, PgPool};

/// Visibility record of a published lesson for one owner.
/// Rows are append-only.
/// Maps to `curriculum_library_items` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LibraryItem {
    pub library_item_id: i64,
    pub lesson_id: i64,
    /// Stored lower-cased, e.g. `teacher`
    #[sqlx(try_from = "String")]
    pub owner_role: UserRole,
    pub owner_id: i64,
    pub published_at: NaiveDateTime,
}

/// New LibraryItem for creation (without generated fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLibraryItem {
    pub lesson_id: i64,
    pub owner_role: UserRole,
    pub owner_id: i64,
    pub published_at: NaiveDateTime,
}

impl LibraryItem {
    /// Insert a library item on an open connection or transaction
    pub async fn insert(
        conn: &mut PgConnection,
        item: &NewLibraryItem,
    ) -> Result<LibraryItem, sqlx::Error> {
        sqlx::query_as::<_, LibraryItem>(
            r#"
            INSERT INTO curriculum_library_items (lesson_id, owner_role, owner_id, published_at)
            VALUES ($1, $2, $3, $4)
            RETURNING library_item_id, lesson_id, owner_role, owner_id, published_at
            "#,
        )
        .bind(item.lesson_id)
        .bind(item.owner_role.to_string())
        .bind(item.owner_id)
        .bind(item.published_at)
        .fetch_one(conn)
        .await
    }

    /// Library view of one owner, newest first
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_role: UserRole,
        owner_id: i64,
    ) -> Result<Vec<LibraryItem>, sqlx::Error> {
        sqlx::query_as::<_, LibraryItem>(
            r#"
            SELECT library_item_id, lesson_id, owner_role, owner_id, published_at
            FROM curriculum_library_items
            WHERE owner_role = $1 AND owner_id = $2
            ORDER BY published_at DESC, library_item_id DESC
            "#,
        )
        .bind(owner_role.to_string())
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }

    /// Count of persisted library items
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM curriculum_library_items")
            .fetch_one(pool)
            .await
    }
}
