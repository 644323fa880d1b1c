//! Session repository for database operations.
//!
//! Tokens are opaque random strings generated by the auth service; this
//! layer only persists and looks them up. The `sessions_token_key` unique
//! constraint guards against the (astronomically unlikely) token collision.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use fashioncamp_core::UserId;

use super::{RepositoryError, map_unique_violation};
use crate::models::Session;

/// Repository for session database operations.
pub struct SessionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a session record for a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a token collision.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        user_id: UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Session, RepositoryError> {
        let session = sqlx::query_as::<_, Session>(
            r"
            INSERT INTO sessions (user_id, token, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, created_at, expires_at
            ",
        )
        .bind(user_id)
        .bind(token)
        .bind(expires_at)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "token already exists"))?;

        Ok(session)
    }

    /// Look up the session backing a token.
    ///
    /// Returns `None` if no session exists for the token, which covers
    /// server-side revocation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<Session>, RepositoryError> {
        let session = sqlx::query_as::<_, Session>(
            r"
            SELECT id, user_id, created_at, expires_at
            FROM sessions
            WHERE token = $1
            ",
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(session)
    }

    /// Delete the session backing a token.
    ///
    /// # Returns
    ///
    /// Returns `true` if a session was deleted, `false` if none existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_by_token(&self, token: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM sessions
            WHERE token = $1
            ",
        )
        .bind(token)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
