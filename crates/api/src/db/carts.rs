//! Cart repository for database operations.
//!
//! The one-active-cart-per-user invariant is enforced by a partial unique
//! index (`carts_one_active_per_user`), so find-or-create is an atomic
//! `INSERT .. ON CONFLICT DO NOTHING` followed by a read. Two simultaneous
//! first-time cart operations for the same user both land on the same row.

use sqlx::PgPool;

use fashioncamp_core::{CartId, ProductId, UserId};

use super::RepositoryError;
use crate::models::{Cart, CartProductView};

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find the user's active cart, creating it if none exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either statement fails.
    pub async fn find_or_create_active(&self, user_id: UserId) -> Result<Cart, RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO carts (user_id, is_active)
            VALUES ($1, TRUE)
            ON CONFLICT (user_id) WHERE is_active DO NOTHING
            ",
        )
        .bind(user_id)
        .execute(self.pool)
        .await?;

        let cart = sqlx::query_as::<_, Cart>(
            r"
            SELECT id, user_id, is_active
            FROM carts
            WHERE user_id = $1 AND is_active
            ",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(cart)
    }

    /// Get a cart by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CartId) -> Result<Option<Cart>, RepositoryError> {
        let cart = sqlx::query_as::<_, Cart>(
            r"
            SELECT id, user_id, is_active
            FROM carts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(cart)
    }

    /// Insert a cart line with quantity 1 unless one already exists.
    ///
    /// Re-adding a product already in the cart leaves the existing line
    /// (and its quantity) untouched.
    ///
    /// # Returns
    ///
    /// Returns `true` if a new line was inserted, `false` if the line
    /// already existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn add_line_if_absent(
        &self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO cart_products (cart_id, product_id, quantity)
            VALUES ($1, $2, 1)
            ON CONFLICT (cart_id, product_id) DO NOTHING
            ",
        )
        .bind(cart_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Replace the quantity on a cart line.
    ///
    /// # Returns
    ///
    /// Returns `true` if a line was updated, `false` if no such line exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn set_line_quantity(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE cart_products
            SET quantity = $1
            WHERE cart_id = $2 AND product_id = $3
            ",
        )
        .bind(quantity)
        .bind(cart_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a cart line if present.
    ///
    /// # Returns
    ///
    /// Returns `true` if a line was deleted, `false` if none existed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_line(
        &self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM cart_products
            WHERE cart_id = $1 AND product_id = $2
            ",
        )
        .bind(cart_id)
        .bind(product_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List a cart's lines joined with their product records.
    ///
    /// Lines whose product has since been deleted are excluded by the
    /// inner join rather than reported as errors.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn lines_with_products(
        &self,
        cart_id: CartId,
    ) -> Result<Vec<CartProductView>, RepositoryError> {
        let lines = sqlx::query_as::<_, CartProductView>(
            r"
            SELECT p.id AS product_id, p.name, p.price, p.stock, cp.quantity, p.image
            FROM cart_products cp
            JOIN products p ON p.id = cp.product_id
            WHERE cp.cart_id = $1
            ORDER BY p.id
            ",
        )
        .bind(cart_id)
        .fetch_all(self.pool)
        .await?;

        Ok(lines)
    }
}
