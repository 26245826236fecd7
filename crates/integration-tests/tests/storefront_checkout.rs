//! Checkout over HTTP.
//!
//! Each test starts its own storefront, so sessions never leak between tests.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use tannery_core::CartSnapshot;
use tannery_integration_tests::{TestServer, sample_cart};

const SHIPPING_FORM: &[(&str, &str)] = &[
    ("email", "ada@example.com"),
    ("first_name", "Ada"),
    ("last_name", "Lovelace"),
    ("address1", "1 Analytical Way"),
    ("city", "New York"),
    ("state", "NY"),
    ("zip", "10001"),
    ("shipping", "overnight"),
];

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let server = TestServer::start(sample_cart()).await;
    let (status, body) = server.get("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_responses_carry_security_headers() {
    let server = TestServer::start(sample_cart()).await;
    let response = server
        .client
        .get(server.url("/checkout"))
        .send()
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["cache-control"], "no-store, max-age=0");
    assert!(headers.contains_key("x-request-id"));
    let csp = headers["content-security-policy"].to_str().unwrap();
    assert!(csp.contains("'nonce-"));
}

// =============================================================================
// Checkout Flow
// =============================================================================

#[tokio::test]
async fn test_empty_cart_shows_notice() {
    let server = TestServer::start(CartSnapshot::default()).await;

    let (status, body) = server.get("/checkout").await;
    assert_eq!(status, 200);
    assert!(body.contains("Your cart is empty"));
    assert!(body.contains("Continue Shopping"));

    let (status, _) = server
        .post_form("/checkout/field", &[("name", "city"), ("value", "Austin")])
        .await;
    assert_eq!(status, 409);
}

#[tokio::test]
async fn test_full_checkout_flow() {
    let server = TestServer::start(sample_cart()).await;

    let (status, body) = server.get("/checkout").await;
    assert_eq!(status, 200);
    assert!(body.contains("Shipping Information"));

    // Blocked until the shipping step is complete
    let (_, body) = server.post_form("/checkout/next", &[]).await;
    assert!(body.contains("Email is required"));
    assert!(body.contains("Please select a shipping method"));

    let (_, body) = server.post_form("/checkout/next", SHIPPING_FORM).await;
    assert!(body.contains("Payment Information"));

    let (_, body) = server
        .post_form("/checkout/next", &[("same_as_shipping", "on")])
        .await;
    assert!(body.contains("Review Your Order"));
    // 140.40 + 35 overnight
    assert!(body.contains("$175.40"));

    let (status, body) = server.post_form("/checkout/place-order", &[]).await;
    assert_eq!(status, 200);
    assert!(body.contains("Order placed successfully!"));
    assert!(body.contains("ada@example.com"));
}

#[tokio::test]
async fn test_state_must_be_chosen() {
    let server = TestServer::start(sample_cart()).await;

    let (_, body) = server.get("/checkout").await;
    assert!(body.contains("<option value=\"\" selected>Select State</option>"));

    // What the untouched selector submits
    let form: Vec<_> = SHIPPING_FORM
        .iter()
        .map(|&(name, value)| (name, if name == "state" { "" } else { value }))
        .collect();
    let (_, body) = server.post_form("/checkout/next", &form).await;
    assert!(body.contains("State is required"));
    assert!(body.contains("Shipping Information"));
}

#[tokio::test]
async fn test_field_edits_survive_navigation() {
    let server = TestServer::start(sample_cart()).await;
    server.get("/checkout").await;

    let (status, _) = server
        .post_form("/checkout/field", &[("name", "city"), ("value", "Brooklyn")])
        .await;
    assert_eq!(status, 204);

    let (status, _) = server
        .post_form("/checkout/field", &[("name", "card_number"), ("value", "4242")])
        .await;
    assert_eq!(status, 400);

    // Re-posting the step form without the city keeps the edited value
    let (_, body) = server.post_form("/checkout/next", &[("zip", "11201")]).await;
    assert!(body.contains("value=\"Brooklyn\""));
    assert!(body.contains("value=\"11201\""));
    assert!(!body.contains("City is required"));
    assert!(body.contains("First name is required"));
}

#[tokio::test]
async fn test_previous_keeps_shipping_details() {
    let server = TestServer::start(sample_cart()).await;
    server.get("/checkout").await;
    server.post_form("/checkout/next", SHIPPING_FORM).await;

    let (_, body) = server
        .post_form("/checkout/previous", &[("same_as_shipping", "on")])
        .await;
    assert!(body.contains("Shipping Information"));
    assert!(body.contains("value=\"ada@example.com\""));
    assert!(!body.contains("is required"));
}

#[tokio::test]
async fn test_reopening_checkout_starts_over() {
    let server = TestServer::start(sample_cart()).await;
    server.get("/checkout").await;
    server.post_form("/checkout/next", SHIPPING_FORM).await;

    let (_, body) = server.get("/checkout").await;
    assert!(body.contains("Shipping Information"));
    assert!(!body.contains("ada@example.com"));
}
