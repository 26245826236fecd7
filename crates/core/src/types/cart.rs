//! Read-only view of the shopper's cart.
//!
//! The cart is owned elsewhere; checkout receives a [`CartSnapshot`] with
//! totals already computed and never mutates it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::shipping::SHIPPING_RATES;

/// Flat per-unit surcharge for a personalized item.
pub const PERSONALIZATION_SURCHARGE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// A cart whose amounts checkout cannot compute without overflowing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartAmountError {
    #[error("line {0} total is out of range")]
    LineOverflow(String),

    #[error("cart total is out of range once shipping is added")]
    TotalOverflow,
}

/// Cart contents and totals at the time checkout reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Sum of line prices before tax and shipping.
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub tax: Decimal,
    /// Subtotal plus tax. Shipping is added on top by checkout.
    #[serde(default)]
    pub total: Decimal,
}

impl CartSnapshot {
    /// Returns `true` if the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Check that every line total and the total with the dearest shipping
    /// rate fit in a `Decimal`.
    ///
    /// Carts that pass can be summarized without overflow.
    ///
    /// # Errors
    ///
    /// Returns the first line, or the total, that overflows.
    pub fn check_amounts(&self) -> Result<(), CartAmountError> {
        if let Some(item) = self.items.iter().find(|item| item.checked_line_total().is_none()) {
            return Err(CartAmountError::LineOverflow(item.id.clone()));
        }

        let max_shipping = SHIPPING_RATES
            .iter()
            .map(|rate| rate.price)
            .max()
            .unwrap_or(Decimal::ZERO);
        self.total
            .checked_add(max_shipping)
            .map(|_| ())
            .ok_or(CartAmountError::TotalOverflow)
    }
}

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub product: CartProduct,
    pub variant: CartVariant,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalization: Option<Personalization>,
}

impl CartItem {
    /// Variant price plus the personalization surcharge, if any.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        if self.personalization.is_some() {
            self.variant.price + PERSONALIZATION_SURCHARGE
        } else {
            self.variant.price
        }
    }

    /// Unit price times quantity.
    ///
    /// Panics on overflow; carts are checked with
    /// [`CartSnapshot::check_amounts`] when they are loaded.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }

    /// Unit price times quantity, or `None` on overflow.
    #[must_use]
    pub fn checked_line_total(&self) -> Option<Decimal> {
        let unit = if self.personalization.is_some() {
            self.variant.price.checked_add(PERSONALIZATION_SURCHARGE)?
        } else {
            self.variant.price
        };
        unit.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartProduct {
    pub title: String,
    #[serde(default)]
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartVariant {
    pub title: String,
    pub price: Decimal,
}

/// Custom text the shopper asked to have added to the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personalization {
    pub text: String,
}
