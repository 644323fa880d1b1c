//! Authentication extractor.
//!
//! Provides the [`CurrentUser`] extractor for handlers that require a
//! signed-in caller. The bearer token is resolved against the sessions
//! table on every request; there is no in-process session cache.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::error::AppError;
use crate::models::User;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Extractor that requires a valid bearer session.
///
/// Rejects with 401 when the `Authorization` header is missing or the
/// token does not resolve, and 404 when the session's user no longer
/// exists.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(current: CurrentUser) -> impl IntoResponse {
///     format!("Hello, {}!", current.user.name)
/// }
/// ```
pub struct CurrentUser {
    /// The authenticated user.
    pub user: User,
    /// The raw bearer token the request presented (for revocation).
    pub token: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let token = bearer_token(parts)
            .ok_or(AppError::Auth(AuthError::Unauthenticated))?
            .to_owned();

        let auth = AuthService::new(state.pool());
        let session = auth.resolve(&token).await?;
        let user = auth.get_user(session.user_id).await?;

        Ok(Self { user, token })
    }
}

/// Extract the bearer token from the `Authorization` header, if any.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
