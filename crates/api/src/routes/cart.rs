//! Cart route handlers.
//!
//! All four endpoints require a bearer session resolved by [`CurrentUser`];
//! the cart service re-derives the caller's active cart so a forged cart ID
//! can be rejected but never acted on.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use fashioncamp_core::{CartId, ProductId};

use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::models::CartView;
use crate::services::cart::{CartError, CartService};
use crate::state::AppState;

/// Request body for replacing a line quantity.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlterQuantityRequest {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Add a product to the caller's active cart (idempotent).
///
/// An unknown product is a 400 on this endpoint.
pub async fn add(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(product_id): Path<ProductId>,
) -> Result<StatusCode> {
    CartService::new(state.pool())
        .add_product(current.user.id, product_id)
        .await
        .map_err(|e| match e {
            CartError::ProductNotFound => {
                AppError::BadRequest("product not found".to_string())
            }
            other => AppError::Cart(other),
        })?;

    Ok(StatusCode::OK)
}

/// View the caller's active cart, creating it if absent.
pub async fn show(State(state): State<AppState>, current: CurrentUser) -> Result<Json<CartView>> {
    let view = CartService::new(state.pool())
        .view_cart(current.user.id)
        .await?;

    Ok(Json(view))
}

/// Replace the quantity on a cart line.
///
/// Rejects with 409 when the supplied cart is not the caller's own
/// active cart, and 400 for a non-positive quantity or absent line.
pub async fn alter_quantity(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(body): Json<AlterQuantityRequest>,
) -> Result<StatusCode> {
    if body.quantity < 1 {
        return Err(AppError::BadRequest(
            "quantity must be a positive integer".to_string(),
        ));
    }

    CartService::new(state.pool())
        .update_quantity(current.user.id, body.cart_id, body.product_id, body.quantity)
        .await
        .map_err(|e| match e {
            CartError::ProductNotFound => {
                AppError::BadRequest("product is not in the cart".to_string())
            }
            other => AppError::Cart(other),
        })?;

    Ok(StatusCode::OK)
}

/// Remove a product from a cart (idempotent).
pub async fn remove(
    State(state): State<AppState>,
    current: CurrentUser,
    Path((cart_id, product_id)): Path<(CartId, ProductId)>,
) -> Result<StatusCode> {
    CartService::new(state.pool())
        .remove_product(current.user.id, cart_id, product_id)
        .await?;

    Ok(StatusCode::OK)
}
