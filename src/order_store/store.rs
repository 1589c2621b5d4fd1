use std::collections::HashSet;
use tracing::{debug, info, warn};
use crate::actor_framework::Store;
use crate::domain::{AcceptedOrderRecord, Notice, Order, OrderId, OrderStatus};
use super::commands::{OrderCommand, OrderOutcome, OrderSnapshot};

/// Owns the active order list and the accepted-order history.
///
/// Orders keep their seed order. An accepted order stays in the active list
/// with status `accepted`; a rejected order is removed outright.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
    accepted_history: Vec<AcceptedOrderRecord>,
}

impl OrderStore {
    /// Builds the store from seed orders.
    ///
    /// Ids must be unique and quantities positive: a repeated id keeps only its
    /// first order, and zero-quantity orders are dropped. Rejected orders never
    /// sit in the active list, so seed orders tagged `rejected` are dropped too.
    pub fn new(seed: Vec<Order>) -> Self {
        let mut seen = HashSet::new();
        let mut orders = Vec::with_capacity(seed.len());
        for order in seed {
            if order.status == OrderStatus::Rejected {
                warn!(order_id = order.id, "Dropping seed order already rejected");
                continue;
            }
            if order.quantity == 0 {
                warn!(order_id = order.id, "Dropping seed order with zero quantity");
                continue;
            }
            if !seen.insert(order.id) {
                warn!(order_id = order.id, "Dropping seed order with duplicate id");
                continue;
            }
            orders.push(order);
        }
        Self {
            orders,
            accepted_history: Vec::new(),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn accepted_history(&self) -> &[AcceptedOrderRecord] {
        &self.accepted_history
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Accepts the order with `id`.
    ///
    /// The history record is taken from the order as found, with the status
    /// forced to `accepted`. Calling this again for an order still in the list
    /// appends another record. An unknown id changes nothing, but the
    /// acceptance notice is returned either way.
    pub fn accept_order(&mut self, id: OrderId) -> Notice {
        match self.orders.iter_mut().find(|order| order.id == id) {
            Some(order) => {
                let record = AcceptedOrderRecord::from_order(order);
                if !order.is_pending() {
                    warn!(order_id = id, status = %order.status, "Order accepted again; history gets another record");
                }
                order.status = OrderStatus::Accepted;
                self.accepted_history.push(record);
                info!(order_id = id, history_len = self.accepted_history.len(), "Order accepted");
            }
            None => debug!(order_id = id, "Order not found, nothing to accept"),
        }
        Notice::order_accepted()
    }

    /// Removes the order with `id` from the active list. History is untouched.
    pub fn reject_order(&mut self, id: OrderId) -> Notice {
        let before = self.orders.len();
        self.orders.retain(|order| order.id != id);
        if self.orders.len() < before {
            info!(order_id = id, "Order rejected and removed");
        } else {
            debug!(order_id = id, "Order not found, nothing to reject");
        }
        Notice::order_rejected()
    }

    pub fn track_order(&self, id: OrderId) -> Notice {
        debug!(order_id = id, "Tracking order");
        Notice::order_tracking(id)
    }

    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            orders: self.orders.clone(),
            accepted_history: self.accepted_history.clone(),
        }
    }
}

impl Store for OrderStore {
    type Command = OrderCommand;
    type Outcome = OrderOutcome;

    const NAME: &'static str = "order_store";

    fn apply(&mut self, command: OrderCommand) -> OrderOutcome {
        match command {
            OrderCommand::AcceptOrder { id } => OrderOutcome::AcceptOrder(self.accept_order(id)),
            OrderCommand::RejectOrder { id } => OrderOutcome::RejectOrder(self.reject_order(id)),
            OrderCommand::TrackOrder { id } => OrderOutcome::TrackOrder(self.track_order(id)),
            OrderCommand::ListOrders => OrderOutcome::ListOrders(self.orders.clone()),
            OrderCommand::AcceptedHistory => {
                OrderOutcome::AcceptedHistory(self.accepted_history.clone())
            }
            OrderCommand::Snapshot => OrderOutcome::Snapshot(self.snapshot()),
        }
    }
}
