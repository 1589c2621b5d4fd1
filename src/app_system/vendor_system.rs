use tokio::task::JoinHandle;
use tracing::{error, info};
use crate::actor_framework::StoreActor;
use crate::app_system::{SystemConfig, SystemError};
use crate::clients::{InventoryClient, OrderClient};
use crate::inventory_store::InventoryStore;
use crate::order_store::OrderStore;

/// The vendor application: one actor per store, plus the clients to reach them.
///
/// Must be created inside a tokio runtime.
pub struct VendorSystem {
    pub order_client: OrderClient,
    pub inventory_client: InventoryClient,
    order_handle: JoinHandle<OrderStore>,
    inventory_handle: JoinHandle<InventoryStore>,
}

impl VendorSystem {
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        info!(
            buffer_size = config.buffer_size,
            orders = config.seed.orders.len(),
            items = config.seed.inventory.len(),
            "Starting vendor system"
        );

        // mpsc channels need room for at least one request
        let buffer_size = config.buffer_size.max(1);

        // 1. Order store
        let order_store = OrderStore::new(config.seed.orders);
        let (order_actor, order_inner) = StoreActor::new(buffer_size, order_store);
        let order_client = OrderClient::new(order_inner);
        let order_handle = tokio::spawn(order_actor.run());

        // 2. Inventory store
        let inventory_store = InventoryStore::new(config.seed.inventory, config.catalog);
        let (inventory_actor, inventory_inner) = StoreActor::new(buffer_size, inventory_store);
        let inventory_client = InventoryClient::new(inventory_inner);
        let inventory_handle = tokio::spawn(inventory_actor.run());

        Self {
            order_client,
            inventory_client,
            order_handle,
            inventory_handle,
        }
    }

    /// Stops both actors and hands back their final state.
    ///
    /// Both actors are asked to stop and both tasks are awaited before any
    /// error is reported. A failed task wins over a failed shutdown request,
    /// since the request only fails once its actor is gone.
    pub async fn shutdown(self) -> Result<(OrderStore, InventoryStore), SystemError> {
        info!("Shutting down system...");

        let order_stop = self.order_client.shutdown().await;
        let inventory_stop = self.inventory_client.shutdown().await;

        let orders = self.order_handle.await;
        let inventory = self.inventory_handle.await;

        let orders = orders.map_err(|e| {
            error!("Order actor task failed: {:?}", e);
            SystemError::TaskFailed(e.to_string())
        })?;
        let inventory = inventory.map_err(|e| {
            error!("Inventory actor task failed: {:?}", e);
            SystemError::TaskFailed(e.to_string())
        })?;
        order_stop?;
        inventory_stop?;

        info!("System shutdown complete.");
        Ok((orders, inventory))
    }
}

impl Default for VendorSystem {
    fn default() -> Self {
        Self::new()
    }
}
