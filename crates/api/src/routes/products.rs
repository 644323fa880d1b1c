//! Catalog route handlers.
//!
//! Read-only listing and category enumeration. Store failures on these
//! two endpoints surface as 400 per the public API contract.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

/// Query parameters for product listing.
#[derive(Debug, Deserialize, Default)]
pub struct ProductQuery {
    /// Exact category filter.
    pub category: Option<String>,
    /// Case-insensitive name substring filter.
    pub search: Option<String>,
}

/// List products, optionally filtered by category and name substring.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool())
        .search(query.category.as_deref(), query.search.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "product listing failed");
            AppError::BadRequest("could not list products".to_string())
        })?;

    Ok(Json(products))
}

/// List the distinct categories in the catalog.
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    let categories = ProductRepository::new(state.pool())
        .categories()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "category listing failed");
            AppError::BadRequest("could not list categories".to_string())
        })?;

    Ok(Json(categories))
}
