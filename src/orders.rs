//! Orders

use std::time::Duration;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::sleep;
use tracing::info;

use crate::products::ProductId;

/// Order placement errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The order contained no items.
    #[error("order contains no items")]
    EmptyOrder,

    /// An item requested zero units.
    #[error("order item for product {0} has zero quantity")]
    ZeroQuantity(ProductId),
}

/// One order line as sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product being ordered.
    pub product_id: ProductId,

    /// Units requested.
    pub quantity: u32,
}

/// A checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Ordered lines.
    pub items: Vec<OrderItem>,

    /// Free-form delivery address.
    pub delivery_address: String,
}

/// Order lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// The order was accepted.
    Confirmed,
}

/// Confirmation returned for an accepted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Backend order identifier.
    pub order_id: String,

    /// Resulting order status.
    pub status: OrderStatus,

    /// When the order was accepted.
    pub placed_at: Timestamp,
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Places an order for the given items.
    async fn place_order(&self, order: NewOrder) -> Result<OrderConfirmation, OrderError>;
}

/// Orders service that confirms every valid order locally.
///
/// Stands in for the `POST /orders` backend integration point until a real
/// order service exists; the simulated delay models the round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubOrdersService {
    latency: Duration,
}

impl StubOrdersService {
    /// Creates a service with the default simulated latency.
    #[must_use]
    pub fn new() -> Self {
        StubOrdersService {
            latency: Duration::from_millis(500),
        }
    }

    /// Creates a service with the given simulated latency.
    #[must_use]
    pub fn with_latency(latency: Duration) -> Self {
        StubOrdersService { latency }
    }
}

impl Default for StubOrdersService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrdersService for StubOrdersService {
    #[tracing::instrument(
        name = "orders.place_order",
        skip(self, order),
        fields(item_count = order.items.len()),
        err
    )]
    async fn place_order(&self, order: NewOrder) -> Result<OrderConfirmation, OrderError> {
        sleep(self.latency).await;

        if order.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        if let Some(item) = order.items.iter().find(|item| item.quantity == 0) {
            return Err(OrderError::ZeroQuantity(item.product_id));
        }

        let placed_at = Timestamp::now();
        let order_id = format!("ORD-{}", placed_at.as_millisecond());

        info!(order_id = %order_id, "order confirmed");

        Ok(OrderConfirmation {
            order_id,
            status: OrderStatus::Confirmed,
            placed_at,
        })
    }
}
