//! Authentication route handlers.
//!
//! Sign-up, sign-in, and sign-out. Request bodies are typed and validated
//! here before any store access; the auth service handles credential and
//! session rules.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::services::auth::AuthService;
use crate::state::AppState;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Sign-up request body.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign-in request body.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign-in response body.
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub name: String,
    pub token: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Register a new account.
///
/// Returns 201 on success, 409 when the email is already registered.
pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<StatusCode> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }

    AuthService::new(state.pool())
        .register(name, &body.email, &body.password)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Sign in and receive a bearer token.
///
/// Returns 404 for unknown email or wrong password (indistinguishable).
pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<Json<SignInResponse>> {
    let (user, token) = AuthService::new(state.pool())
        .sign_in(&body.email, &body.password)
        .await?;

    tracing::info!(user_id = %user.id, "user signed in");

    Ok(Json(SignInResponse {
        name: user.name,
        token,
    }))
}

/// Revoke the presented session.
///
/// The extractor requires a live session, so a token that was already
/// revoked is rejected with 401 before reaching the delete.
pub async fn sign_out(State(state): State<AppState>, current: CurrentUser) -> Result<StatusCode> {
    AuthService::new(state.pool()).revoke(&current.token).await?;

    tracing::info!(user_id = %current.user.id, "user signed out");

    Ok(StatusCode::OK)
}
