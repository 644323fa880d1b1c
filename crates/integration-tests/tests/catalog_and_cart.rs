//! End-to-end tests for the catalog and cart endpoints.
//!
//! Gated on `FASHIONCAMP_BASE_URL`. The catalog tests assume the database
//! was seeded with `fashioncamp-cli seed` (they only need the table to be
//! non-empty; the filter assertions hold for any catalog).

#![allow(clippy::unwrap_used)]

use fashioncamp_integration_tests::TestContext;
use serde_json::{Value, json};

/// Fetch the catalog and return the id of some product.
async fn any_product_id(ctx: &TestContext) -> i64 {
    let resp = ctx.client.get(ctx.url("/products")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let products: Vec<Value> = resp.json().await.unwrap();
    assert!(!products.is_empty(), "catalog must be seeded");
    products[0]["id"].as_i64().unwrap()
}

/// Fetch the caller's cart view.
async fn view_cart(ctx: &TestContext, token: &str) -> Value {
    let resp = ctx
        .client
        .get(ctx.url("/cart"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn products_listing_honors_filters() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    // Unfiltered listing returns the whole catalog.
    let resp = ctx.client.get(ctx.url("/products")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let all: Vec<Value> = resp.json().await.unwrap();
    assert!(!all.is_empty(), "catalog must be seeded");

    // Substring search is case-insensitive and matches anywhere in the name.
    let resp = ctx
        .client
        .get(ctx.url("/products?search=ROB"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let matched: Vec<Value> = resp.json().await.unwrap();
    assert!(!matched.is_empty(), "seed catalog contains 'roberval'");
    for product in &matched {
        let name = product["name"].as_str().unwrap().to_lowercase();
        assert!(name.contains("rob"), "search leaked {name:?}");
    }

    // Filters compose with AND; every hit satisfies both.
    let resp = ctx
        .client
        .get(ctx.url("/products?category=China&search=erva"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let matched: Vec<Value> = resp.json().await.unwrap();
    for product in &matched {
        assert_eq!(product["category"], "China");
        let name = product["name"].as_str().unwrap().to_lowercase();
        assert!(name.contains("erva"));
    }
}

#[tokio::test]
async fn categories_are_distinct() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let resp = ctx.client.get(ctx.url("/categories")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let categories: Vec<String> = resp.json().await.unwrap();
    assert!(!categories.is_empty(), "catalog must be seeded");

    let mut deduped = categories.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), categories.len());
}

#[tokio::test]
async fn adding_a_product_is_idempotent() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let token = ctx.register_and_sign_in().await;
    let product_id = any_product_id(&ctx).await;

    for _ in 0..2 {
        let resp = ctx
            .client
            .post(ctx.url(&format!("/product/add/{product_id}")))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let cart = view_cart(&ctx, &token).await;
    let lines = cart["cartProducts"].as_array().unwrap();
    assert_eq!(lines.len(), 1, "re-adding must not duplicate the line");
    assert_eq!(lines[0]["productId"].as_i64().unwrap(), product_id);
    assert_eq!(lines[0]["quantity"], 1);
}

#[tokio::test]
async fn concurrent_cart_resolutions_share_one_cart() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let token = ctx.register_and_sign_in().await;

    // A fresh account has no cart yet; every one of these requests races
    // to create it. The partial unique index must collapse them onto a
    // single active cart.
    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let client = ctx.client.clone();
        let url = ctx.url("/cart");
        let token = token.clone();
        tasks.spawn(async move {
            let resp = client.get(url).bearer_auth(token).send().await.unwrap();
            assert_eq!(resp.status(), 200);
            let cart: Value = resp.json().await.unwrap();
            cart["cartId"].as_i64().unwrap()
        });
    }

    let mut cart_ids = Vec::new();
    while let Some(result) = tasks.join_next().await {
        cart_ids.push(result.unwrap());
    }
    assert_eq!(cart_ids.len(), 8);

    cart_ids.sort_unstable();
    cart_ids.dedup();
    assert_eq!(
        cart_ids.len(),
        1,
        "concurrent first resolutions produced more than one active cart"
    );
}

#[tokio::test]
async fn concurrent_adds_create_one_line() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let token = ctx.register_and_sign_in().await;
    let product_id = any_product_id(&ctx).await;

    // First-time adds also race cart creation, then the line insert; both
    // must converge on one cart with one line.
    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let client = ctx.client.clone();
        let url = ctx.url(&format!("/product/add/{product_id}"));
        let token = token.clone();
        tasks.spawn(async move {
            let resp = client.post(url).bearer_auth(token).send().await.unwrap();
            assert_eq!(resp.status(), 200);
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    let cart = view_cart(&ctx, &token).await;
    let lines = cart["cartProducts"].as_array().unwrap();
    assert_eq!(lines.len(), 1, "concurrent adds must not duplicate the line");
    assert_eq!(lines[0]["quantity"], 1);
}

#[tokio::test]
async fn adding_an_unknown_product_is_400() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let token = ctx.register_and_sign_in().await;

    let resp = ctx
        .client
        .post(ctx.url("/product/add/999999999"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn altering_quantity_replaces_the_value() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let token = ctx.register_and_sign_in().await;
    let product_id = any_product_id(&ctx).await;

    let resp = ctx
        .client
        .post(ctx.url(&format!("/product/add/{product_id}")))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let cart = view_cart(&ctx, &token).await;
    let cart_id = cart["cartId"].as_i64().unwrap();

    // Replace, not accumulate: 5 then 3 ends at 3.
    for quantity in [5, 3] {
        let resp = ctx
            .client
            .put(ctx.url("/cart/alter-product-quantity"))
            .bearer_auth(&token)
            .json(&json!({
                "cartId": cart_id,
                "productId": product_id,
                "quantity": quantity,
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let cart = view_cart(&ctx, &token).await;
    assert_eq!(cart["cartProducts"][0]["quantity"], 3);
}

#[tokio::test]
async fn altering_a_foreign_cart_is_409() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let token = ctx.register_and_sign_in().await;
    let product_id = any_product_id(&ctx).await;

    let cart = view_cart(&ctx, &token).await;
    let cart_id = cart["cartId"].as_i64().unwrap();

    let resp = ctx
        .client
        .put(ctx.url("/cart/alter-product-quantity"))
        .bearer_auth(&token)
        .json(&json!({
            "cartId": cart_id + 1_000_000,
            "productId": product_id,
            "quantity": 2,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn altering_quantity_validates_the_payload() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let token = ctx.register_and_sign_in().await;
    let product_id = any_product_id(&ctx).await;

    let cart = view_cart(&ctx, &token).await;
    let cart_id = cart["cartId"].as_i64().unwrap();

    // Non-positive quantity
    let resp = ctx
        .client
        .put(ctx.url("/cart/alter-product-quantity"))
        .bearer_auth(&token)
        .json(&json!({
            "cartId": cart_id,
            "productId": product_id,
            "quantity": 0,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Product not in the cart
    let resp = ctx
        .client
        .put(ctx.url("/cart/alter-product-quantity"))
        .bearer_auth(&token)
        .json(&json!({
            "cartId": cart_id,
            "productId": product_id,
            "quantity": 2,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn removing_a_product_is_idempotent() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let token = ctx.register_and_sign_in().await;
    let product_id = any_product_id(&ctx).await;

    let resp = ctx
        .client
        .post(ctx.url(&format!("/product/add/{product_id}")))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let cart = view_cart(&ctx, &token).await;
    let cart_id = cart["cartId"].as_i64().unwrap();

    for _ in 0..2 {
        let resp = ctx
            .client
            .delete(ctx.url(&format!("/cart/remove-product/{cart_id}/{product_id}")))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let cart = view_cart(&ctx, &token).await;
    assert!(cart["cartProducts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn removing_from_a_foreign_cart_is_404() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let token = ctx.register_and_sign_in().await;
    let product_id = any_product_id(&ctx).await;

    let cart = view_cart(&ctx, &token).await;
    let cart_id = cart["cartId"].as_i64().unwrap();

    let resp = ctx
        .client
        .delete(ctx.url(&format!(
            "/cart/remove-product/{}/{product_id}",
            cart_id + 1_000_000
        )))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
