//! Database operations for the FashionCamp `PostgreSQL` store.
//!
//! # Tables
//!
//! - `users` - Account identity and password digests
//! - `sessions` - Bearer-token session records (30-day expiry)
//! - `products` - Read-only catalog
//! - `carts` - One active cart per user (partial unique index)
//! - `cart_products` - Cart lines, unique per `(cart_id, product_id)`
//!
//! Queries are bound at runtime (`query_as`/`QueryBuilder`), so no database
//! is needed at compile time. Uniqueness invariants (email, active cart,
//! cart line) live in the schema and are mapped to `RepositoryError` here.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p fashioncamp-cli -- migrate
//! ```

pub mod carts;
pub mod products;
pub mod sessions;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use carts::CartRepository;
pub use products::ProductRepository;
pub use sessions::SessionRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Map a sqlx error to `Conflict` when it is a unique-constraint violation.
pub(crate) fn map_unique_violation(e: sqlx::Error, conflict: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(conflict.to_owned());
    }
    RepositoryError::Database(e)
}
