//! Handlers for registration, login (`/token`), and the protected greeting.

use axum::extract::State;
use axum::Json;
use qdo_core::error::CoreError;
use qdo_db::models::user::{CreateUser, RegisterUser};
use qdo_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_dummy, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::{ValidatedForm, ValidatedJson};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /token` (OAuth2 password grant).
///
/// `grant_type`, `scope`, and client credentials may be sent by OAuth2
/// clients; they are accepted and ignored. Empty values are not rejected
/// here; they fail as bad credentials like any other unknown pair.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register/
///
/// Create an account. Fails with 400 `CONFLICT` if the username is taken.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<RegisterUser>,
) -> AppResult<Json<MessageResponse>> {
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: input.username,
        password_hash,
    };

    let user = UserRepo::create_if_absent(&state.pool, &create)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Conflict("Username already exists".into())))?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok(Json(MessageResponse::new("User registered")))
}

/// POST /token
///
/// Exchange username + password for a bearer token. Unknown users and wrong
/// passwords produce the same 400 response.
pub async fn login(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    let Some(user) = UserRepo::find_by_username(&state.pool, &form.username).await? else {
        verify_dummy(&form.password);
        tracing::debug!("Login failed: unknown username");
        return Err(CoreError::BadCredentials.into());
    };

    let password_valid = verify_password(&form.password, &user.password_hash).unwrap_or_else(|e| {
        tracing::warn!(user_id = user.id, error = %e, "Stored password hash is malformed");
        false
    });

    if !password_valid {
        tracing::debug!(user_id = user.id, "Login failed: wrong password");
        return Err(CoreError::BadCredentials.into());
    }

    let access_token = generate_access_token(&user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        expires_in: state.config.jwt.expires_in_secs(),
    }))
}

/// GET /protected/
///
/// Greet the bearer of a valid token.
pub async fn protected(user: AuthUser) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("Hello, {}!", user.username)))
}
