//! Collaborators the checkout talks to.
//!
//! # Services
//!
//! - `cart` - Read-only access to the shopper's cart
//! - `orders` - The order placement boundary
//!
//! Both are traits so the storefront can be wired to a real cart or order
//! backend without touching the checkout routes.

pub mod cart;
pub mod orders;

pub use cart::{CartLoadError, CartProvider, FixtureCartProvider};
pub use orders::{LoggingOrderPlacer, OrderConfirmation, OrderPlacer};
