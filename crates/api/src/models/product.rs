//! Product domain types.
//!
//! The catalog is read-only from this service's perspective; rows are
//! written by the seeding tooling, never by request handlers.

use serde::Serialize;
use sqlx::FromRow;

use fashioncamp_core::{Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product display name.
    pub name: String,
    /// Category this product is listed under.
    pub category: String,
    /// Price in integer cents.
    pub price: Price,
    /// Units in stock.
    pub stock: i32,
    /// Image URL.
    pub image: String,
}
