//! Order totals shown on the review step.

use rust_decimal::Decimal;

use crate::types::{CartSnapshot, Price, ShippingRate};

/// One priced line of the review step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub id: String,
    pub product_title: String,
    pub variant_title: String,
    pub personalization: Option<String>,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Review-step totals.
///
/// Subtotal and tax come from the cart unchanged. Shipping is added on top of
/// the cart total; nothing is recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub lines: Vec<SummaryLine>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Option<&'static ShippingRate>,
    pub total: Decimal,
}

impl OrderSummary {
    /// Compute the summary for a cart and an optional shipping selection.
    #[must_use]
    pub fn new(cart: &CartSnapshot, shipping: Option<&'static ShippingRate>) -> Self {
        let lines = cart
            .items
            .iter()
            .map(|item| SummaryLine {
                id: item.id.clone(),
                product_title: item.product.title.clone(),
                variant_title: item.variant.title.clone(),
                personalization: item.personalization.as_ref().map(|p| p.text.clone()),
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        let shipping_price = shipping.map_or(Decimal::ZERO, |rate| rate.price);

        Self {
            lines,
            subtotal: cart.subtotal,
            tax: cart.tax,
            shipping,
            total: cart.total + shipping_price,
        }
    }

    /// Shipping label: "$0" with nothing selected, otherwise the rate's label.
    #[must_use]
    pub fn shipping_label(&self) -> String {
        self.shipping.map_or_else(
            || Price::usd(Decimal::ZERO).display_compact(),
            ShippingRate::price_label,
        )
    }
}
