//! Session domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use fashioncamp_core::{SessionId, UserId};

/// A durable session backing one bearer token.
///
/// A user may hold any number of concurrent sessions; each sign-in creates
/// a fresh one. Presenting the token after `expires_at` fails resolution
/// and lazily deletes the row.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    /// Unique session ID.
    pub id: SessionId,
    /// User who owns this session.
    pub user_id: UserId,
    /// When the session was issued.
    pub created_at: DateTime<Utc>,
    /// When the session expires (30 days after issue).
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session has expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
