use crate::domain::{AcceptedOrderRecord, Notice, Order, OrderId};
use crate::order_store::{OrderCommand, OrderError, OrderOutcome, OrderSnapshot, OrderStore};
use crate::actor_framework::StoreClient;

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<OrderStore>,
}

impl_client_new!(OrderClient, OrderStore);

store_client_methods!(OrderClient, OrderError, OrderCommand => OrderOutcome {
    /// Accepts an order; returns the acknowledgment for the vendor.
    fn accept_order(id: OrderId) -> Notice;
    /// Rejects and removes an order.
    fn reject_order(id: OrderId) -> Notice;
    fn track_order(id: OrderId) -> Notice;
    fn list_orders() -> Vec<Order>;
    fn accepted_history() -> Vec<AcceptedOrderRecord>;
    fn snapshot() -> OrderSnapshot;
});
