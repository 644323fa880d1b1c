//! Authentication service.
//!
//! Handles sign-up, sign-in, and the bearer-token session lifecycle.
//! Passwords are hashed with Argon2id; tokens are opaque random strings
//! backed by durable session rows (see [`token`]), so revocation is a
//! server-side delete rather than a token-format concern.

mod error;
pub mod token;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use sqlx::PgPool;

use fashioncamp_core::{Email, UserId};

use crate::db::{RepositoryError, SessionRepository, UserRepository};
use crate::models::{Session, User};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Session lifetime from issue to expiry.
const SESSION_TTL_DAYS: i64 = 30;

/// Authentication service.
///
/// Constructed per-request over a borrowed pool; all state lives in the
/// database.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    sessions: SessionRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
            sessions: SessionRepository::new(pool),
        }
    }

    // =========================================================================
    // Registration and sign-in
    // =========================================================================

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(name, &email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Sign in with email and password, issuing a fresh session.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller. Each successful sign-in creates a new session; existing
    /// sessions for the user stay valid.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(User, String), AuthError> {
        let email = Email::parse(email)?;

        let (user, password_hash) = self
            .users
            .get_with_password(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        let token = self.issue(user.id).await?;
        Ok((user, token))
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Issue a new session token for a user.
    ///
    /// Performs one durable write: the session row with a 30-day expiry.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the session cannot be persisted.
    pub async fn issue(&self, user_id: UserId) -> Result<String, AuthError> {
        let token = token::generate();
        let expires_at = Utc::now() + Duration::days(SESSION_TTL_DAYS);
        self.sessions.create(user_id, &token, expires_at).await?;
        Ok(token)
    }

    /// Resolve a presented bearer token to its owning user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthenticated` if the token is malformed or
    /// the session has expired (expired rows are lazily deleted).
    /// Returns `AuthError::SessionNotFound` if the token is well-formed
    /// but no session record backs it (covers server-side revocation).
    pub async fn resolve(&self, token: &str) -> Result<Session, AuthError> {
        if !token::is_well_formed(token) {
            return Err(AuthError::Unauthenticated);
        }

        let session = self
            .sessions
            .find_by_token(token)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        if session.is_expired_at(Utc::now()) {
            // Best-effort cleanup; the caller is rejected either way.
            if let Err(e) = self.sessions.delete_by_token(token).await {
                tracing::warn!(error = %e, "failed to delete expired session");
            }
            return Err(AuthError::Unauthenticated);
        }

        Ok(session)
    }

    /// Revoke the session backing a token.
    ///
    /// Revoking a token with no session is a no-op, so sign-out is
    /// idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the delete fails.
    pub async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        if !token::is_well_formed(token) {
            return Err(AuthError::Unauthenticated);
        }
        self.sessions.delete_by_token(token).await?;
        Ok(())
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the user doesn't exist.
    pub async fn get_user(&self, user_id: UserId) -> Result<User, AuthError> {
        self.users
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
