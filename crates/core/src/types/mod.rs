//! Core types for Tannery.
//!
//! This module provides type-safe wrappers for the checkout's domain concepts.

pub mod address;
pub mod cart;
pub mod email;
pub mod price;
pub mod shipping;

pub use address::{Address, AddressField, STATE_OPTIONS};
pub use cart::{
    CartAmountError, CartItem, CartProduct, CartSnapshot, CartVariant, PERSONALIZATION_SURCHARGE,
    Personalization,
};
pub use email::{Email, EmailError};
pub use price::{CurrencyCode, Price};
pub use shipping::{SHIPPING_RATES, ShippingRate, ShippingRateId, UnknownShippingRate};
