//! Cart mutation engine.
//!
//! Every operation takes a `UserId` already resolved from a session and
//! re-resolves the caller's active cart, so a supplied cart ID can gate
//! but never redirect a mutation. Add and remove are idempotent; quantity
//! update replaces the stored value.

mod error;

pub use error::CartError;

use sqlx::PgPool;

use fashioncamp_core::{CartId, ProductId, UserId};

use crate::db::{CartRepository, ProductRepository};
use crate::models::{Cart, CartView};

/// Cart mutation and view service.
pub struct CartService<'a> {
    carts: CartRepository<'a>,
    products: ProductRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            carts: CartRepository::new(pool),
            products: ProductRepository::new(pool),
        }
    }

    /// Resolve the caller's active cart, creating one if absent.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the store fails.
    pub async fn resolve_active_cart(&self, user_id: UserId) -> Result<Cart, CartError> {
        Ok(self.carts.find_or_create_active(user_id).await?)
    }

    /// Add a product to the caller's active cart.
    ///
    /// Idempotent: if the product is already in the cart, the existing
    /// line (and its quantity) is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ProductNotFound` if the product does not exist.
    pub async fn add_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), CartError> {
        let product = self
            .products
            .get(product_id)
            .await?
            .ok_or(CartError::ProductNotFound)?;

        let cart = self.carts.find_or_create_active(user_id).await?;

        let inserted = self.carts.add_line_if_absent(cart.id, product.id).await?;
        if !inserted {
            tracing::debug!(cart_id = %cart.id, product_id = %product.id, "re-add ignored");
        }

        Ok(())
    }

    /// Replace the quantity on a line of the caller's active cart.
    ///
    /// The supplied `cart_id` must match the caller's own active cart;
    /// anything else is an ownership conflict. Quantity positivity is the
    /// boundary layer's job, not enforced here.
    ///
    /// # Errors
    ///
    /// Returns `CartError::OwnershipConflict` if `cart_id` is not the
    /// caller's active cart.
    /// Returns `CartError::ProductNotFound` if the product has no line in
    /// the cart.
    pub async fn update_quantity(
        &self,
        user_id: UserId,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), CartError> {
        let active = self.carts.find_or_create_active(user_id).await?;
        if active.id != cart_id {
            return Err(CartError::OwnershipConflict);
        }

        let updated = self
            .carts
            .set_line_quantity(active.id, product_id, quantity)
            .await?;
        if !updated {
            return Err(CartError::ProductNotFound);
        }

        Ok(())
    }

    /// Remove a product from a cart.
    ///
    /// Idempotent: deleting a line that does not exist succeeds. A cart
    /// belonging to another user is reported as missing rather than
    /// disclosing its existence.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CartNotFound` if the cart does not exist or is
    /// not the caller's.
    /// Returns `CartError::ProductNotFound` if the product does not exist.
    pub async fn remove_product(
        &self,
        user_id: UserId,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<(), CartError> {
        let cart = self
            .carts
            .get(cart_id)
            .await?
            .ok_or(CartError::CartNotFound)?;
        if cart.user_id != user_id {
            return Err(CartError::CartNotFound);
        }

        self.products
            .get(product_id)
            .await?
            .ok_or(CartError::ProductNotFound)?;

        let deleted = self.carts.delete_line(cart.id, product_id).await?;
        if !deleted {
            tracing::debug!(cart_id = %cart.id, product_id = %product_id, "remove of absent line");
        }

        Ok(())
    }

    /// View the caller's active cart joined with product records.
    ///
    /// Creates the cart if the user doesn't have one yet, so a fresh
    /// account sees an empty cart rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the store fails.
    pub async fn view_cart(&self, user_id: UserId) -> Result<CartView, CartError> {
        let cart = self.carts.find_or_create_active(user_id).await?;
        let cart_products = self.carts.lines_with_products(cart.id).await?;

        Ok(CartView {
            cart_id: cart.id,
            cart_products,
        })
    }
}
