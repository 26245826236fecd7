//! Session-related types.
//!
//! The checkout wizard is stored in the session between requests.

/// Session keys.
pub mod keys {
    /// Key for the in-progress checkout wizard.
    pub const CHECKOUT: &str = "checkout";
}
