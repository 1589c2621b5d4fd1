use serde::Serialize;
use crate::domain::{AcceptedOrderRecord, Notice, Order, OrderId};

/// Commands understood by the [`OrderStore`](super::OrderStore).
#[derive(Debug, Clone)]
pub enum OrderCommand {
    /// Marks the order accepted and appends it to the history.
    AcceptOrder { id: OrderId },
    /// Removes the order from the active list.
    RejectOrder { id: OrderId },
    /// Produces a tracking notice without touching state.
    TrackOrder { id: OrderId },
    ListOrders,
    AcceptedHistory,
    Snapshot,
}

/// Results from OrderCommands - variants match 1:1 with OrderCommand
#[derive(Debug, Clone)]
pub enum OrderOutcome {
    AcceptOrder(Notice),
    RejectOrder(Notice),
    TrackOrder(Notice),
    ListOrders(Vec<Order>),
    AcceptedHistory(Vec<AcceptedOrderRecord>),
    Snapshot(OrderSnapshot),
}

/// Everything the presentation layer needs to redraw the order screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSnapshot {
    pub orders: Vec<Order>,
    pub accepted_history: Vec<AcceptedOrderRecord>,
}
