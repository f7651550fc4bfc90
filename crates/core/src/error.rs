use crate::types::DbId;

/// Message returned for every failed login, whether or not the user exists.
pub const BAD_CREDENTIALS_MESSAGE: &str = "Incorrect username or password";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{}", BAD_CREDENTIALS_MESSAGE)]
    BadCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
