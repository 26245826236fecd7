//! Tannery Core - Checkout domain library.
//!
//! This crate holds the checkout wizard and the types it works with. The
//! storefront binary renders it; nothing here performs I/O.
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no HTTP,
//! no sessions, no clients. Callers load a [`CheckoutWizard`], apply one event,
//! and store it again.
//!
//! # Modules
//!
//! - [`types`] - Prices, emails, addresses, shipping rates and the cart snapshot
//! - [`checkout`] - The shipping → payment → review wizard and order summary

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod types;

pub use checkout::{
    CheckoutData, CheckoutStep, CheckoutWizard, Field, FieldEdit, FieldErrors, OrderError,
    OrderRequest, OrderSummary, StepProgress, SummaryLine,
};
pub use types::*;
