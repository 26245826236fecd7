//! Order placement boundary.
//!
//! There is no order backend yet. [`LoggingOrderPlacer`] records the order
//! in the logs and hands back a confirmation so the checkout flow can finish.

use rust_decimal::Decimal;
use tannery_core::{OrderError, OrderRequest};
use uuid::Uuid;

/// Result of a successfully placed order.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    pub order_number: Uuid,
    pub email: String,
    pub total: Decimal,
}

/// Places orders with a backend.
///
/// Implementations must not consume the request on failure: the checkout
/// keeps the shopper's entries and shows the error on the review step.
pub trait OrderPlacer: Send + Sync {
    /// Place an order.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Rejected` if the backend declines the order.
    fn place(&self, order: &OrderRequest) -> Result<OrderConfirmation, OrderError>;
}

/// Logs each order and accepts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOrderPlacer;

impl OrderPlacer for LoggingOrderPlacer {
    fn place(&self, order: &OrderRequest) -> Result<OrderConfirmation, OrderError> {
        let confirmation = OrderConfirmation {
            order_number: Uuid::new_v4(),
            email: order.email.clone(),
            total: order.total(),
        };

        if order.parsed_email().is_none() {
            tracing::warn!(
                order_number = %confirmation.order_number,
                email = %order.email,
                "Order email does not look deliverable"
            );
        }

        tracing::info!(
            order_number = %confirmation.order_number,
            email = %order.email,
            ship_to = %order.data.shipping_address.full_name(),
            shipping = %order.shipping_rate.id,
            lines = order.cart.items.len(),
            total = %confirmation.total,
            same_as_shipping = order.data.same_as_shipping,
            "Processing order"
        );

        Ok(confirmation)
    }
}
