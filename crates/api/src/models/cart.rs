//! Cart domain types.

use serde::Serialize;
use sqlx::FromRow;

use fashioncamp_core::{CartId, Price, ProductId, UserId};

/// A shopping cart.
///
/// At most one cart per user is active at any time; the schema enforces
/// this with a partial unique index on `(user_id) WHERE is_active`. Carts
/// are never physically deleted, only deactivated.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct Cart {
    /// Unique cart ID.
    pub id: CartId,
    /// User who owns this cart.
    pub user_id: UserId,
    /// Whether this is the user's active cart.
    pub is_active: bool,
}

/// One cart line joined with its product record.
///
/// Produced by the cart view query; lines referencing deleted products
/// are dropped by the inner join rather than surfaced as errors.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartProductView {
    /// Product referenced by this line.
    pub product_id: ProductId,
    /// Product display name.
    pub name: String,
    /// Price in integer cents.
    pub price: Price,
    /// Units in stock.
    pub stock: i32,
    /// Quantity of this product in the cart.
    pub quantity: i32,
    /// Image URL.
    pub image: String,
}

/// Response body for the cart view endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Active cart ID.
    pub cart_id: CartId,
    /// Lines joined with product data, ordered by product ID.
    pub cart_products: Vec<CartProductView>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_view_serializes_camel_case() {
        let view = CartView {
            cart_id: CartId::new(4),
            cart_products: vec![CartProductView {
                product_id: ProductId::new(1),
                name: "roberval".to_string(),
                price: Price::from_cents(1999),
                stock: 10,
                quantity: 1,
                image: "https://img.example/roberval.png".to_string(),
            }],
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["cartId"], 4);
        assert_eq!(json["cartProducts"][0]["productId"], 1);
        assert_eq!(json["cartProducts"][0]["price"], 1999);
        assert_eq!(json["cartProducts"][0]["quantity"], 1);
    }
}
