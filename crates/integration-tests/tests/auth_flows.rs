//! End-to-end tests for account registration and sessions.
//!
//! Gated on `FASHIONCAMP_BASE_URL`; see the crate docs for setup.

#![allow(clippy::unwrap_used)]

use fashioncamp_integration_tests::TestContext;
use serde_json::{Value, json};

#[tokio::test]
async fn health_endpoints_respond() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let resp = ctx.client.get(ctx.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let resp = ctx
        .client
        .get(ctx.url("/health/ready"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn sign_up_rejects_duplicate_email() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let credentials = ctx.register_user().await;

    let resp = ctx
        .client
        .post(ctx.url("/sign-up"))
        .json(&json!({
            "name": "Second Registration",
            "email": credentials.email,
            "password": credentials.password,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn sign_up_rejects_invalid_payloads() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    // Malformed email
    let resp = ctx
        .client
        .post(ctx.url("/sign-up"))
        .json(&json!({
            "name": "Tester",
            "email": "not-an-email",
            "password": "654321",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Password below the minimum length
    let resp = ctx
        .client
        .post(ctx.url("/sign-up"))
        .json(&json!({
            "name": "Tester",
            "email": format!("it-{}@fashioncamp.test", uuid::Uuid::new_v4()),
            "password": "12345",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn sign_in_returns_name_and_token() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let credentials = ctx.register_user().await;

    let resp = ctx
        .client
        .post(ctx.url("/sign-in"))
        .json(&json!({
            "email": credentials.email,
            "password": credentials.password,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Integration Tester");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn sign_in_with_bad_credentials_is_404() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let credentials = ctx.register_user().await;

    // Wrong password
    let resp = ctx
        .client
        .post(ctx.url("/sign-in"))
        .json(&json!({
            "email": credentials.email,
            "password": "wrong-password",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Unknown account
    let resp = ctx
        .client
        .post(ctx.url("/sign-in"))
        .json(&json!({
            "email": format!("missing-{}@fashioncamp.test", uuid::Uuid::new_v4()),
            "password": "654321",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn cart_requires_authentication() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let resp = ctx.client.get(ctx.url("/cart")).send().await.unwrap();
    assert_eq!(resp.status(), 401);

    let resp = ctx
        .client
        .get(ctx.url("/cart"))
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn sign_out_revokes_the_session() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let token = ctx.register_and_sign_in().await;

    let resp = ctx
        .client
        .post(ctx.url("/sign-out"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // The token is dead afterwards.
    let resp = ctx
        .client
        .get(ctx.url("/cart"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn concurrent_sessions_are_independent() {
    let Some(ctx) = TestContext::from_env() else {
        return;
    };

    let credentials = ctx.register_user().await;
    let first = ctx.sign_in(&credentials).await;
    let second = ctx.sign_in(&credentials).await;
    assert_ne!(first, second);

    // Revoking one session leaves the other valid.
    let resp = ctx
        .client
        .post(ctx.url("/sign-out"))
        .bearer_auth(&first)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = ctx
        .client
        .get(ctx.url("/cart"))
        .bearer_auth(&second)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}
