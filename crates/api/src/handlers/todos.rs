//! Handlers for the `/todos/` resource.

use axum::extract::{Path, State};
use axum::Json;
use qdo_core::error::CoreError;
use qdo_core::types::DbId;
use qdo_db::models::todo::{CreateTodo, TodoResponse, UpdateTodo};
use qdo_db::repositories::TodoRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// A freshly created todo plus a success flag and message.
#[derive(Debug, Serialize)]
pub struct TodoWithMessage {
    pub todo: TodoResponse,
    pub success: bool,
    pub message: &'static str,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Todo", id })
}

/// POST /todos/
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTodo>,
) -> AppResult<Json<TodoWithMessage>> {
    let todo = TodoRepo::create(&state.pool, &input).await?;
    tracing::info!(todo_id = todo.id, "Todo created");
    Ok(Json(TodoWithMessage {
        todo: todo.into(),
        success: true,
        message: "You created successfully",
    }))
}

/// GET /todos/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TodoResponse>>> {
    let todos = TodoRepo::list(&state.pool).await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// PUT /todos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTodo>,
) -> AppResult<Json<TodoResponse>> {
    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(todo.into()))
}

/// DELETE /todos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TodoResponse>> {
    let todo = TodoRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(todo_id = id, "Todo deleted");
    Ok(Json(todo.into()))
}

/// PUT /todos/{id}/complete
pub async fn toggle_complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TodoResponse>> {
    let todo = TodoRepo::toggle_completed(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::debug!(todo_id = id, completed = todo.completed, "Todo toggled");
    Ok(Json(todo.into()))
}
