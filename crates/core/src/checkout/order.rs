//! The hand-off from a finished checkout to whatever places the order.

use rust_decimal::Decimal;
use thiserror::Error;

use super::CheckoutData;
use crate::types::{Address, CartSnapshot, Email, ShippingRate};

/// Reasons an order cannot be placed.
///
/// Every variant is shown on the review step; the shopper's entries are kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Submit was attempted before reaching the review step.
    #[error("orders can only be placed from the review step")]
    NotOnReviewStep,

    /// No shipping method is selected.
    #[error("Please select a shipping method")]
    MissingShippingRate,

    /// The cart emptied out while checking out.
    #[error("Your cart is empty")]
    EmptyCart,

    /// The order backend declined the order.
    #[error("We couldn't place your order: {0}")]
    Rejected(String),
}

/// Everything needed to place an order.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Contact email exactly as entered.
    pub email: String,
    pub data: CheckoutData,
    pub shipping_rate: &'static ShippingRate,
    pub cart: CartSnapshot,
}

impl OrderRequest {
    /// Build a request from a completed form.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::MissingShippingRate`] if no rate is selected and
    /// [`OrderError::EmptyCart`] if the cart has no items. The email is only
    /// required to be non-empty, which the shipping step already checks.
    pub fn new(
        data: &CheckoutData,
        shipping_rate: Option<&'static ShippingRate>,
        cart: &CartSnapshot,
    ) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let shipping_rate = shipping_rate.ok_or(OrderError::MissingShippingRate)?;

        Ok(Self {
            email: data.email.clone(),
            data: data.clone(),
            shipping_rate,
            cart: cart.clone(),
        })
    }

    /// The contact email, if it looks like a deliverable address.
    #[must_use]
    pub fn parsed_email(&self) -> Option<Email> {
        Email::parse(&self.email).ok()
    }

    /// Address to bill, honouring "same as shipping".
    #[must_use]
    pub const fn billing_address(&self) -> &Address {
        if self.data.same_as_shipping {
            &self.data.shipping_address
        } else {
            &self.data.billing_address
        }
    }

    /// Amount charged: cart total plus shipping.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total + self.shipping_rate.price
    }
}
