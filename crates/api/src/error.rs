//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::cart::CartError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request lacks a valid session.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// State conflict (duplicate email, foreign cart).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => auth_status(err),
            Self::Cart(err) => cart_status(err),
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Auth(err) => auth_message(err),
            Self::Cart(err) => cart_message(err),
            Self::NotFound(msg) => msg.clone(),
            Self::Unauthorized(msg) => msg.clone(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Conflict(msg) => msg.clone(),
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl AppError {
    /// Whether this error reflects a server-side failure worth capturing.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Database(_)
                | Self::Internal(_)
                | Self::Auth(AuthError::Repository(_) | AuthError::PasswordHash)
                | Self::Cart(CartError::Repository(_))
        )
    }
}

fn auth_status(err: &AuthError) -> StatusCode {
    match err {
        // Sign-in rejects unknown email and wrong password identically,
        // surfaced as 404 per the public API contract.
        AuthError::InvalidCredentials | AuthError::UserNotFound => StatusCode::NOT_FOUND,
        AuthError::EmailTaken => StatusCode::CONFLICT,
        AuthError::InvalidEmail(_) | AuthError::WeakPassword(_) => StatusCode::BAD_REQUEST,
        AuthError::Unauthenticated | AuthError::SessionNotFound => StatusCode::UNAUTHORIZED,
        AuthError::Repository(_) | AuthError::PasswordHash => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn auth_message(err: &AuthError) -> String {
    match err {
        AuthError::InvalidCredentials | AuthError::UserNotFound => {
            "Invalid email or password".to_string()
        }
        AuthError::EmailTaken => "An account with this email already exists".to_string(),
        AuthError::InvalidEmail(_) => "Invalid email address".to_string(),
        AuthError::WeakPassword(msg) => msg.clone(),
        AuthError::Unauthenticated => "Missing or invalid session token".to_string(),
        AuthError::SessionNotFound => "Session not found".to_string(),
        AuthError::Repository(_) | AuthError::PasswordHash => "Internal server error".to_string(),
    }
}

fn cart_status(err: &CartError) -> StatusCode {
    match err {
        CartError::ProductNotFound | CartError::CartNotFound => StatusCode::NOT_FOUND,
        CartError::OwnershipConflict => StatusCode::CONFLICT,
        CartError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn cart_message(err: &CartError) -> String {
    match err {
        CartError::ProductNotFound => "Product not found".to_string(),
        CartError::CartNotFound => "Cart not found".to_string(),
        CartError::OwnershipConflict => "Cart does not belong to this user".to_string(),
        CartError::Repository(_) => "Internal server error".to_string(),
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Conflict("test".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::EmailTaken)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::Unauthenticated)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::SessionNotFound)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_cart_error_status_codes() {
        assert_eq!(
            get_status(AppError::Cart(CartError::ProductNotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Cart(CartError::OwnershipConflict)),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_internal_detail_not_leaked() {
        let err = AppError::Internal("connection refused at 10.0.0.3:5432".to_string());
        assert!(err.is_server_error());

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
