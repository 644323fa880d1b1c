//! Cart error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Referenced product does not exist (or is not in the cart).
    #[error("product not found")]
    ProductNotFound,

    /// Referenced cart does not exist.
    #[error("cart not found")]
    CartNotFound,

    /// Referenced cart is not the caller's own active cart.
    #[error("cart ownership conflict")]
    OwnershipConflict,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
