//! Form fields and the per-field validation messages shown under them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::AddressField;

/// A field that can carry a validation message.
///
/// Ordering follows the form layout so errors list top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    FirstName,
    LastName,
    Address1,
    City,
    State,
    Zip,
    /// The shipping method radio group.
    Shipping,
}

impl Field {
    /// Every required field on the shipping step, in form order.
    pub const REQUIRED_FOR_SHIPPING: [Self; 8] = [
        Self::Email,
        Self::FirstName,
        Self::LastName,
        Self::Address1,
        Self::City,
        Self::State,
        Self::Zip,
        Self::Shipping,
    ];

    /// Form field name, also used as the error key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Address1 => "address1",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Shipping => "shipping",
        }
    }

    /// Message shown when the field is left empty.
    #[must_use]
    pub const fn required_message(self) -> &'static str {
        match self {
            Self::Email => "Email is required",
            Self::FirstName => "First name is required",
            Self::LastName => "Last name is required",
            Self::Address1 => "Address is required",
            Self::City => "City is required",
            Self::State => "State is required",
            Self::Zip => "ZIP code is required",
            Self::Shipping => "Please select a shipping method",
        }
    }
}

impl From<AddressField> for Field {
    fn from(field: AddressField) -> Self {
        match field {
            AddressField::FirstName => Self::FirstName,
            AddressField::LastName => Self::LastName,
            AddressField::Address1 => Self::Address1,
            AddressField::City => Self::City,
            AddressField::State => Self::State,
            AddressField::Zip => Self::Zip,
        }
    }
}

/// Validation messages keyed by field.
///
/// A validation pass builds a new set and replaces the old one; messages are
/// never merged across passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Record the "required" message for a field.
    pub fn require(&mut self, field: Field) {
        self.0.insert(field, field.required_message().to_string());
    }

    /// Message for a field, if it failed validation.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_require_uses_fixed_message() {
        let mut errors = FieldErrors::default();
        errors.require(Field::Zip);
        errors.require(Field::Shipping);

        assert_eq!(errors.get(Field::Zip), Some("ZIP code is required"));
        assert_eq!(errors.get(Field::Shipping), Some("Please select a shipping method"));
        assert_eq!(errors.get(Field::Email), None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_iter_in_form_order() {
        let mut errors = FieldErrors::default();
        errors.require(Field::Shipping);
        errors.require(Field::Email);
        errors.require(Field::City);

        let keys: Vec<_> = errors.iter().map(|(field, _)| field.key()).collect();
        assert_eq!(keys, ["email", "city", "shipping"]);
    }

    #[test]
    fn test_serializes_as_key_map() {
        let mut errors = FieldErrors::default();
        errors.require(Field::FirstName);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["first_name"], "First name is required");

        let back: FieldErrors = serde_json::from_value(json).unwrap();
        assert_eq!(back, errors);
    }

    #[test]
    fn test_address_fields_map_to_error_keys() {
        for field in AddressField::ALL {
            assert_eq!(Field::from(field).key(), field.key());
        }
    }
}
