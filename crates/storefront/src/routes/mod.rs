//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Checkout
//! GET  /checkout               - Start a fresh checkout (or empty-cart notice)
//! POST /checkout/field         - Apply one field edit (204, no validation)
//! POST /checkout/next          - Validate the step and advance
//! POST /checkout/previous      - Go back one step
//! POST /checkout/place-order   - Place the order from the review step
//! ```

pub mod checkout;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::checkout_rate_limiter;
use crate::state::AppState;

/// Create the checkout routes router.
///
/// Form posts are rate limited per client IP; the page itself is not.
pub fn checkout_routes() -> Router<AppState> {
    let posts = Router::new()
        .route("/field", post(checkout::field))
        .route("/next", post(checkout::next))
        .route("/previous", post(checkout::previous))
        .route("/place-order", post(checkout::place_order))
        .route_layer(checkout_rate_limiter());

    Router::new().route("/", get(checkout::show)).merge(posts)
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/checkout", checkout_routes())
}
