//! Multi-step checkout wizard.
//!
//! The wizard walks the shopper through three steps:
//!
//! ```text
//! Shipping ──next (validated)──▶ Payment ──next──▶ Review ──submit──▶ OrderRequest
//!    ▲                              │                 │
//!    └──────────previous────────────┴─────previous────┘
//! ```
//!
//! Only the shipping step has a validation gate. Field edits are applied one
//! at a time through [`FieldEdit`] and never validate; validation runs on
//! transitions and replaces the error set wholesale.

mod fields;
mod order;
mod summary;

pub use fields::{Field, FieldErrors};
pub use order::{OrderError, OrderRequest};
pub use summary::{OrderSummary, SummaryLine};

use serde::{Deserialize, Serialize};

use crate::types::{Address, AddressField, CartSnapshot, ShippingRate, ShippingRateId};

// =============================================================================
// Steps
// =============================================================================

/// A step of the checkout wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Payment,
    Review,
}

impl CheckoutStep {
    /// All steps in order.
    pub const ALL: [Self; 3] = [Self::Shipping, Self::Payment, Self::Review];

    /// Zero-based position.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Shipping => 0,
            Self::Payment => 1,
            Self::Review => 2,
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Shipping => "shipping",
            Self::Payment => "payment",
            Self::Review => "review",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Shipping => "Shipping",
            Self::Payment => "Payment",
            Self::Review => "Review",
        }
    }

    /// The following step, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Shipping => Some(Self::Payment),
            Self::Payment => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// The preceding step, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Shipping => None,
            Self::Payment => Some(Self::Shipping),
            Self::Review => Some(Self::Payment),
        }
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Self::Shipping)
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Review)
    }
}

/// Progress indicator state for one step.
///
/// Always derived from the wizard's current step, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepProgress {
    pub step: CheckoutStep,
    /// One-based number shown in the indicator bubble.
    pub number: usize,
    /// Strictly before the current step.
    pub completed: bool,
    pub current: bool,
}

impl StepProgress {
    /// Highlighted in the indicator: completed or current.
    #[must_use]
    pub const fn reached(&self) -> bool {
        self.completed || self.current
    }
}

// =============================================================================
// Form Data
// =============================================================================

/// Everything the shopper has typed into the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutData {
    pub email: String,
    pub shipping_address: Address,
    /// Collected but unused while `same_as_shipping` is set. There is no
    /// billing form yet, so it stays at its defaults.
    pub billing_address: Address,
    pub same_as_shipping: bool,
}

impl Default for CheckoutData {
    fn default() -> Self {
        Self {
            email: String::new(),
            shipping_address: Address::default(),
            billing_address: Address::default(),
            same_as_shipping: true,
        }
    }
}

/// A single-field change coming from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Email(String),
    ShippingAddress(AddressField, String),
    SameAsShipping(bool),
    /// Raw rate id from the radio group; unknown ids are ignored.
    SelectShipping(String),
}

impl FieldEdit {
    /// Interpret a `(name, value)` pair posted by the form.
    ///
    /// Returns `None` for names the form does not have, including the
    /// decorative payment inputs.
    #[must_use]
    pub fn from_form(name: &str, value: String) -> Option<Self> {
        match name {
            "email" => Some(Self::Email(value)),
            "same_as_shipping" => Some(Self::SameAsShipping(is_checked(&value))),
            "shipping" => Some(Self::SelectShipping(value)),
            _ => AddressField::from_key(name).map(|field| Self::ShippingAddress(field, value)),
        }
    }
}

/// HTML checkbox values count as checked; anything else does not.
fn is_checked(value: &str) -> bool {
    matches!(value, "on" | "true" | "1")
}

// =============================================================================
// Wizard
// =============================================================================

/// Checkout wizard state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutWizard {
    step: CheckoutStep,
    data: CheckoutData,
    selected_shipping: Option<ShippingRateId>,
    errors: FieldErrors,
}

impl CheckoutWizard {
    /// A fresh wizard on the shipping step with an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    #[must_use]
    pub const fn data(&self) -> &CheckoutData {
        &self.data
    }

    /// Errors from the most recent validation pass.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The selected catalog rate, if any.
    #[must_use]
    pub fn selected_shipping(&self) -> Option<&'static ShippingRate> {
        self.selected_shipping.map(ShippingRateId::rate)
    }

    /// Apply one field edit.
    ///
    /// Returns `false` only when a shipping rate id is not in the catalog, in
    /// which case the previous selection is kept.
    pub fn apply(&mut self, edit: FieldEdit) -> bool {
        match edit {
            FieldEdit::Email(value) => self.data.email = value,
            FieldEdit::ShippingAddress(field, value) => {
                self.data.shipping_address.set(field, value);
            }
            FieldEdit::SameAsShipping(checked) => self.data.same_as_shipping = checked,
            FieldEdit::SelectShipping(id) => match id.parse::<ShippingRateId>() {
                Ok(id) => self.selected_shipping = Some(id),
                Err(_) => return false,
            },
        }
        true
    }

    /// Validate a step, replacing the current errors.
    ///
    /// Returns `true` when no field failed.
    pub fn validate_step(&mut self, step: CheckoutStep) -> bool {
        let mut errors = FieldErrors::default();

        if step == CheckoutStep::Shipping {
            for field in Field::REQUIRED_FOR_SHIPPING {
                if self.is_missing(field) {
                    errors.require(field);
                }
            }
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    fn is_missing(&self, field: Field) -> bool {
        let address = &self.data.shipping_address;
        match field {
            Field::Email => self.data.email.is_empty(),
            Field::FirstName => address.first_name.is_empty(),
            Field::LastName => address.last_name.is_empty(),
            Field::Address1 => address.address1.is_empty(),
            Field::City => address.city.is_empty(),
            Field::State => address.state.is_empty(),
            Field::Zip => address.zip.is_empty(),
            Field::Shipping => self.selected_shipping.is_none(),
        }
    }

    /// Validate the current step and advance if it passes.
    ///
    /// Returns `true` if the step changed.
    pub fn handle_next(&mut self) -> bool {
        if !self.validate_step(self.step) {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Go back one step without validating. No-op on the first step.
    ///
    /// Returns `true` if the step changed.
    pub fn handle_previous(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Re-validate the review step and build the order request.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotOnReviewStep`] unless the wizard is on the
    /// review step, and otherwise any error from [`OrderRequest::new`].
    pub fn handle_submit(&mut self, cart: &CartSnapshot) -> Result<OrderRequest, OrderError> {
        if self.step != CheckoutStep::Review || !self.validate_step(self.step) {
            return Err(OrderError::NotOnReviewStep);
        }
        OrderRequest::new(&self.data, self.selected_shipping(), cart)
    }

    /// Progress indicator for every step, derived from the current step.
    #[must_use]
    pub fn progress(&self) -> [StepProgress; 3] {
        let current = self.step.index();
        CheckoutStep::ALL.map(|step| StepProgress {
            step,
            number: step.index() + 1,
            completed: step.index() < current,
            current: step.index() == current,
        })
    }

    /// Review-step totals for a cart.
    #[must_use]
    pub fn summary(&self, cart: &CartSnapshot) -> OrderSummary {
        OrderSummary::new(cart, self.selected_shipping())
    }
}
