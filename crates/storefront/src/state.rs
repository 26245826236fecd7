//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{
    CartLoadError, CartProvider, FixtureCartProvider, LoggingOrderPlacer, OrderPlacer,
};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and is read-only once built.
/// Per-shopper checkout state lives in the session, not here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cart: Arc<dyn CartProvider>,
    orders: Arc<dyn OrderPlacer>,
}

impl AppState {
    /// Create application state with the default collaborators.
    ///
    /// The cart comes from `config.cart_file` when set, otherwise it is empty.
    /// Orders are logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured cart file cannot be loaded.
    pub fn new(config: StorefrontConfig) -> Result<Self, CartLoadError> {
        let cart = match &config.cart_file {
            Some(path) => FixtureCartProvider::from_file(path)?,
            None => {
                tracing::warn!("STOREFRONT_CART_FILE not set, checkout will show an empty cart");
                FixtureCartProvider::empty()
            }
        };

        Ok(Self::with_services(
            config,
            Arc::new(cart),
            Arc::new(LoggingOrderPlacer),
        ))
    }

    /// Create application state with explicit collaborators.
    #[must_use]
    pub fn with_services(
        config: StorefrontConfig,
        cart: Arc<dyn CartProvider>,
        orders: Arc<dyn OrderPlacer>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                cart,
                orders,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the cart read interface.
    #[must_use]
    pub fn cart(&self) -> &dyn CartProvider {
        self.inner.cart.as_ref()
    }

    /// Get the order placement boundary.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderPlacer {
        self.inner.orders.as_ref()
    }
}
