//! Repository for the `notes` table.

use notekeeper_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, category_id, created_at, is_favorite";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List notes oldest first, optionally restricted to one category.
    ///
    /// Ties on `created_at` fall back to insertion order (`id`).
    pub async fn list(pool: &PgPool, category_id: Option<DbId>) -> Result<Vec<Note>, sqlx::Error> {
        if let Some(category_id) = category_id {
            let query = format!(
                "SELECT {COLUMNS} FROM notes
                 WHERE category_id = $1
                 ORDER BY created_at ASC, id ASC"
            );
            sqlx::query_as::<_, Note>(&query)
                .bind(category_id)
                .fetch_all(pool)
                .await
        } else {
            let query = format!("SELECT {COLUMNS} FROM notes ORDER BY created_at ASC, id ASC");
            sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
        }
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new note, returning the created row.
    ///
    /// `created_at` comes from the database clock; `is_favorite` defaults to
    /// `false` when omitted.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, content, category_id, is_favorite)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id)
            .bind(input.is_favorite.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Partially update a note. `created_at` is never touched.
    ///
    /// Uses `COALESCE` so only provided fields are changed. `category_id`
    /// is applied whenever the outer option is present, which lets `null`
    /// clear it. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let category_id_provided = input.category_id.is_some();
        let category_id_value = input.category_id.flatten();

        let query = format!(
            "UPDATE notes SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                category_id = CASE WHEN $4 THEN $5 ELSE category_id END,
                is_favorite = COALESCE($6, is_favorite)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(category_id_provided)
            .bind(category_id_value)
            .bind(input.is_favorite)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
