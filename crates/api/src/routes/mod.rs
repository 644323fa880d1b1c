//! HTTP route handlers for the FashionCamp API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings the database)
//!
//! # Auth
//! POST /sign-up                - Register an account
//! POST /sign-in                - Sign in, returns {name, token}
//! POST /sign-out               - Revoke the presented session (bearer)
//!
//! # Catalog
//! GET  /products               - Product listing (?category=&search=)
//! GET  /categories             - Distinct category names
//!
//! # Cart (bearer token)
//! POST   /product/add/{id}                          - Idempotent add
//! GET    /cart                                      - Cart view
//! PUT    /cart/alter-product-quantity               - Replace line quantity
//! DELETE /cart/remove-product/{cartId}/{productId}  - Idempotent remove
//! ```

pub mod auth;
pub mod cart;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/sign-up", post(auth::sign_up))
        .route("/sign-in", post(auth::sign_in))
        .route("/sign-out", post(auth::sign_out))
        // Catalog
        .route("/products", get(products::index))
        .route("/categories", get(products::categories))
        // Cart
        .route("/product/add/{id}", post(cart::add))
        .route("/cart", get(cart::show))
        .route("/cart/alter-product-quantity", put(cart::alter_quantity))
        .route(
            "/cart/remove-product/{cart_id}/{product_id}",
            delete(cart::remove),
        )
}
