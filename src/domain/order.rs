use serde::{Deserialize, Serialize};
use std::fmt;

pub type OrderId = u32;

/// Lifecycle state of a customer order.
///
/// `Rejected` exists for completeness of the data contract; rejected orders are
/// removed from the active list rather than kept with this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Rejected,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// Represents a customer order for a vegetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub vegetable: String,
    pub quantity: u32,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new pending order.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, supplied by the seed data
    /// * `customer_name` - Customer's display name
    /// * `vegetable` - Requested vegetable
    /// * `quantity` - Requested amount in kg
    pub fn new(
        id: OrderId,
        customer_name: impl Into<String>,
        vegetable: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            vegetable: vegetable.into(),
            quantity,
            status: OrderStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

/// Copy of an order taken at the moment it was accepted.
///
/// Lives in the accepted-order history and never changes after it is recorded.
/// Only built through [`AcceptedOrderRecord::from_order`], so `status` is
/// always `accepted`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedOrderRecord {
    pub id: OrderId,
    pub customer_name: String,
    pub vegetable: String,
    pub quantity: u32,
    pub status: OrderStatus,
}

impl AcceptedOrderRecord {
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name.clone(),
            vegetable: order.vegetable.clone(),
            quantity: order.quantity,
            status: OrderStatus::Accepted,
        }
    }
}
