//! Postal addresses collected during checkout.

use serde::{Deserialize, Serialize};

/// States offered by the shipping form, as `(code, name)` pairs.
///
/// The first entry is the empty "Select State" placeholder, so a new form
/// starts with no state chosen.
pub const STATE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select State"),
    ("CA", "California"),
    ("NY", "New York"),
    ("TX", "Texas"),
    ("FL", "Florida"),
];

/// Country every new address starts with.
pub const DEFAULT_COUNTRY: &str = "US";

/// A shipping or billing address.
///
/// Fields are free text while the shopper types. Required fields are checked
/// by the checkout wizard when the shopper tries to leave the shipping step,
/// never at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    /// State or province code (e.g., "CA").
    pub state: String,
    pub zip: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            address1: String::new(),
            address2: None,
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl Address {
    /// Full name for display, e.g. "Ada Lovelace".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Current value of an editable field.
    #[must_use]
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::FirstName => &self.first_name,
            AddressField::LastName => &self.last_name,
            AddressField::Address1 => &self.address1,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Zip => &self.zip,
        }
    }

    /// Replace one editable field, leaving the rest untouched.
    pub fn set(&mut self, field: AddressField, value: String) {
        let slot = match field {
            AddressField::FirstName => &mut self.first_name,
            AddressField::LastName => &mut self.last_name,
            AddressField::Address1 => &mut self.address1,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::Zip => &mut self.zip,
        };
        *slot = value;
    }
}

/// Address fields the shipping form lets the shopper edit.
///
/// `address2` and `country` are part of [`Address`] but have no input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    FirstName,
    LastName,
    Address1,
    City,
    State,
    Zip,
}

impl AddressField {
    /// Every editable field, in form order.
    pub const ALL: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Address1,
        Self::City,
        Self::State,
        Self::Zip,
    ];

    /// Form field name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Address1 => "address1",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
        }
    }

    /// Look up a field by its form name.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}
