//! Handlers for the `/notes/` and `/note/` resources.

use axum::extract::{Path, State};
use axum::Json;
use qdo_core::error::CoreError;
use qdo_core::search::{clamp_limit, clamp_offset, DEFAULT_SEARCH_LIMIT};
use qdo_core::types::DbId;
use qdo_db::models::note::{CreateNote, NoteResponse, UpdateNote};
use qdo_db::repositories::NoteRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedJson, ValidatedQuery};
use crate::query::NoteSearchParams;
use crate::state::AppState;

/// A note plus a success flag and message, returned by every note mutation.
#[derive(Debug, Serialize)]
pub struct NoteWithMessage {
    pub note: NoteResponse,
    pub success: bool,
    pub message: &'static str,
}

impl NoteWithMessage {
    fn new(note: impl Into<NoteResponse>, message: &'static str) -> Self {
        Self {
            note: note.into(),
            success: true,
            message,
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Note", id })
}

/// GET /notes/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<NoteResponse>>> {
    let notes = NoteRepo::list(&state.pool).await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// POST /note/
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateNote>,
) -> AppResult<Json<NoteWithMessage>> {
    let note = NoteRepo::create(&state.pool, &input).await?;
    tracing::info!(note_id = note.id, "Note created");
    Ok(Json(NoteWithMessage::new(note, "Note created successfully")))
}

/// PUT /note/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateNote>,
) -> AppResult<Json<NoteWithMessage>> {
    let note = NoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(note_id = id, "Note updated");
    Ok(Json(NoteWithMessage::new(note, "Note updated successfully")))
}

/// DELETE /note/{id}
///
/// Responds with the values the note held when it was removed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<NoteWithMessage>> {
    let note = NoteRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(note_id = id, "Note deleted");
    Ok(Json(NoteWithMessage::new(note, "Note deleted successfully")))
}

/// GET /note/search/?query=&skip=&limit=
pub async fn search(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<NoteSearchParams>,
) -> AppResult<Json<Vec<NoteResponse>>> {
    let offset = clamp_offset(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_SEARCH_LIMIT);

    let notes = NoteRepo::search(&state.pool, &params.query, offset, limit).await?;
    tracing::debug!(query = %params.query, offset, limit, hits = notes.len(), "Note search");
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}
