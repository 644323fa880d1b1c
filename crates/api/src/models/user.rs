//! User domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use fashioncamp_core::{Email, UserId};

/// A registered account.
///
/// Created on sign-up and immutable thereafter; the password digest is
/// fetched separately by the auth service and never leaves the db layer
/// attached to this type.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name shown after sign-in.
    pub name: String,
    /// User's email address (unique).
    pub email: Email,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}
