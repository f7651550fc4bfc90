//! User entity model and DTOs.

use qdo_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;
use validator::Validate;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Registration request body. The password is plaintext and is hashed
/// before it reaches [`CreateUser`].
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// DTO for inserting a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_username() {
        let input = RegisterUser {
            username: String::new(),
            password: "secret".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn accepts_long_username() {
        let input = RegisterUser {
            username: "u".repeat(300),
            password: "secret".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn accepts_valid_registration() {
        let input = RegisterUser {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        assert!(input.validate().is_ok());
    }
}
