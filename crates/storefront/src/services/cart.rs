//! Cart read interface.
//!
//! Checkout only ever reads the cart. The storefront ships with a fixture
//! provider that serves one cart loaded from a JSON file at startup.

use std::path::Path;

use tannery_core::{CartAmountError, CartSnapshot};
use thiserror::Error;

/// Errors that can occur when loading a cart fixture.
#[derive(Debug, Error)]
pub enum CartLoadError {
    /// The file could not be read.
    #[error("failed to read cart file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid cart document.
    #[error("failed to parse cart file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The cart's amounts overflow when totalled.
    #[error("invalid cart amounts: {0}")]
    Amounts(#[from] CartAmountError),
}

/// Source of the shopper's cart.
pub trait CartProvider: Send + Sync {
    /// Current cart contents and totals.
    fn cart(&self) -> CartSnapshot;
}

/// Serves the same fixed cart to every shopper.
#[derive(Debug, Clone, Default)]
pub struct FixtureCartProvider {
    cart: CartSnapshot,
}

impl FixtureCartProvider {
    #[must_use]
    pub const fn new(cart: CartSnapshot) -> Self {
        Self { cart }
    }

    /// A provider whose cart has no items. Checkout shows the empty-cart notice.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the cart from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `CartLoadError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, CartLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse the cart from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `CartLoadError::Parse` if the document is not a cart and
    /// `CartLoadError::Amounts` if its totals would overflow.
    pub fn from_json(json: &str) -> Result<Self, CartLoadError> {
        let cart: CartSnapshot = serde_json::from_str(json)?;
        cart.check_amounts()?;
        tracing::info!(
            lines = cart.items.len(),
            units = cart.item_count(),
            total = %cart.total,
            "Cart fixture loaded"
        );
        Ok(Self::new(cart))
    }
}

impl CartProvider for FixtureCartProvider {
    fn cart(&self) -> CartSnapshot {
        self.cart.clone()
    }
}
