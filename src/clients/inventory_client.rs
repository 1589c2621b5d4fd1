use crate::domain::{InventoryItem, ItemId, VegetableCatalogEntry};
use crate::inventory_store::{
    AddOutcome, InventoryCommand, InventoryError, InventoryOutcome, InventorySnapshot,
    InventoryStore, PendingAddition,
};
use crate::actor_framework::StoreClient;

/// Client for interacting with the inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: StoreClient<InventoryStore>,
}

impl_client_new!(InventoryClient, InventoryStore);

store_client_methods!(InventoryClient, InventoryError, InventoryCommand => InventoryOutcome {
    /// Returns the new quantity, or `None` if the item does not exist.
    fn adjust_quantity(id: ItemId, delta: i64) -> Option<u32>;
    fn remove_item(id: ItemId) -> bool;
    fn begin_add(entry: VegetableCatalogEntry) -> PendingAddition;
    fn set_pending_quantity(quantity: i64) -> u32;
    fn step_pending_quantity(delta: i64) -> u32;
    fn commit_add() -> AddOutcome;
    fn cancel_add() -> ();
    fn back_to_selecting() -> ();
    fn list_inventory() -> Vec<InventoryItem>;
    fn catalog() -> Vec<VegetableCatalogEntry>;
    fn pending_addition() -> PendingAddition;
    fn snapshot() -> InventorySnapshot;
});
