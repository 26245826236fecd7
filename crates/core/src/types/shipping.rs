//! Shipping rate catalog.
//!
//! The storefront offers a fixed set of three rates. They are compiled in and
//! cannot be extended at runtime.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::Price;

/// Identifier of a catalog shipping rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingRateId {
    Standard,
    Express,
    Overnight,
}

impl ShippingRateId {
    /// Stable string id used in forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
            Self::Overnight => "overnight",
        }
    }

    /// The catalog entry for this id.
    #[must_use]
    pub fn rate(self) -> &'static ShippingRate {
        match self {
            Self::Standard => &SHIPPING_RATES[0],
            Self::Express => &SHIPPING_RATES[1],
            Self::Overnight => &SHIPPING_RATES[2],
        }
    }
}

impl fmt::Display for ShippingRateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shipping rate id that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shipping rate: {0}")]
pub struct UnknownShippingRate(pub String);

impl FromStr for ShippingRateId {
    type Err = UnknownShippingRate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SHIPPING_RATES
            .iter()
            .map(|rate| rate.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownShippingRate(s.to_string()))
    }
}

/// A selectable shipping option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingRate {
    pub id: ShippingRateId,
    pub title: &'static str,
    /// Flat price in dollars, never negative.
    pub price: Decimal,
    /// Upper bound on business days until delivery, at least one.
    pub estimated_days: u8,
    pub description: &'static str,
}

impl ShippingRate {
    /// Price label shown next to the rate: "Free" or a compact amount.
    #[must_use]
    pub fn price_label(&self) -> String {
        let price = Price::usd(self.price);
        if price.is_zero() {
            "Free".to_string()
        } else {
            price.display_compact()
        }
    }
}

/// The shipping catalog, in display order.
pub static SHIPPING_RATES: [ShippingRate; 3] = [
    ShippingRate {
        id: ShippingRateId::Standard,
        title: "Standard Shipping",
        price: Decimal::from_parts(10, 0, 0, false, 0),
        estimated_days: 5,
        description: "5-7 business days",
    },
    ShippingRate {
        id: ShippingRateId::Express,
        title: "Express Shipping",
        price: Decimal::from_parts(20, 0, 0, false, 0),
        estimated_days: 2,
        description: "2-3 business days",
    },
    ShippingRate {
        id: ShippingRateId::Overnight,
        title: "Overnight Shipping",
        price: Decimal::from_parts(35, 0, 0, false, 0),
        estimated_days: 1,
        description: "Next business day",
    },
];
