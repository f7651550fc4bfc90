//! Todo entity model and DTOs.

use qdo_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A todo row from the `todos` table.
#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub task: String,
    pub completed: bool,
}

/// DTO for creating a new todo. New todos always start incomplete.
///
/// `task` carries no rules; an empty string is a valid task.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodo {
    pub task: String,
}

/// DTO for replacing the task text of an existing todo.
pub type UpdateTodo = CreateTodo;

/// Todo representation returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct TodoResponse {
    pub id: DbId,
    pub task: String,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            task: todo.task,
            completed: todo.completed,
        }
    }
}
