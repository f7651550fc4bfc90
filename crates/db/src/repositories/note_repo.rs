//! Repository for the `notes` table.

use qdo_core::search::substring_pattern;
use qdo_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, body, created_at";

/// Provides CRUD and search operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, body)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all notes in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY id ASC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Overwrite the title and body of a note.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET title = $2, body = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note, returning the values the row held at deletion time.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("DELETE FROM notes WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring search over title and body.
    ///
    /// `query` is matched literally (LIKE wildcards are escaped). Results are
    /// ordered by id and paginated with `offset` / `limit`, which callers are
    /// expected to have clamped.
    pub async fn search(
        pool: &PgPool,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE title ILIKE $1 OR body ILIKE $1
             ORDER BY id ASC
             OFFSET $2 LIMIT $3"
        );
        sqlx::query_as::<_, Note>(&sql)
            .bind(substring_pattern(query))
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
