//! Note entity model and DTOs.

use qdo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A note row from the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new note.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNote {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Body must not be empty"))]
    pub body: String,
}

/// DTO for replacing the title and body of an existing note.
///
/// Both fields are required; an update overwrites the whole note content.
pub type UpdateNote = CreateNote;

/// Note representation returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            body: note.body,
            created_at: note.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, body: &str) -> CreateNote {
        CreateNote {
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn accepts_non_empty_fields() {
        assert!(input("Groceries", "Milk, eggs").validate().is_ok());
    }

    #[test]
    fn rejects_empty_title() {
        let errors = input("", "body").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn rejects_empty_body() {
        let errors = input("title", "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("body"));
    }
}
