//! Integration tests for Tannery.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tannery-integration-tests
//! ```
//!
//! The HTTP tests start the storefront in-process on an ephemeral port and
//! drive it with a cookie-aware `reqwest` client, so no external services
//! are needed.
//!
//! # Test Categories
//!
//! - `checkout_wizard` - Wizard flows through the core crate
//! - `storefront_checkout` - Checkout over HTTP

#![allow(clippy::missing_panics_doc)]

use std::net::SocketAddr;
use std::sync::Arc;

use tannery_core::CartSnapshot;
use tannery_storefront::config::StorefrontConfig;
use tannery_storefront::services::{FixtureCartProvider, LoggingOrderPlacer};
use tannery_storefront::state::AppState;
use url::Url;

/// Cart used by the checkout tests: one personalized wallet, two units.
pub const SAMPLE_CART_JSON: &str = r#"{
    "items": [
        {
            "id": "line-1",
            "product": { "title": "Bifold Wallet", "handle": "bifold-wallet" },
            "variant": { "title": "Chestnut", "price": "50.00" },
            "quantity": 2,
            "personalization": { "text": "A.L." }
        }
    ],
    "subtotal": "130.00",
    "tax": "10.40",
    "total": "140.40"
}"#;

/// Parse [`SAMPLE_CART_JSON`].
#[must_use]
pub fn sample_cart() -> CartSnapshot {
    serde_json::from_str(SAMPLE_CART_JSON).expect("sample cart fixture is valid JSON")
}

/// A storefront running on a local ephemeral port.
pub struct TestServer {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestServer {
    /// Start the storefront serving `cart`.
    pub async fn start(cart: CartSnapshot) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has a local address");
        let base_url = format!("http://{addr}");

        let config = StorefrontConfig {
            host: addr.ip(),
            port: addr.port(),
            base_url: Url::parse(&base_url).expect("Test base URL is valid"),
            cart_file: None,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };
        let state = AppState::with_services(
            config,
            Arc::new(FixtureCartProvider::new(cart)),
            Arc::new(LoggingOrderPlacer),
        );
        let app = tannery_storefront::app(state);

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server error");
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST a form and return the response body.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> (u16, String) {
        let response = self
            .client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .expect("Request failed");
        let status = response.status().as_u16();
        let body = response.text().await.expect("Response body is text");
        (status, body)
    }

    /// GET a path and return the response body.
    pub async fn get(&self, path: &str) -> (u16, String) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed");
        let status = response.status().as_u16();
        let body = response.text().await.expect("Response body is text");
        (status, body)
    }
}
