use serde::Serialize;
use crate::domain::{InventoryItem, ItemId, VegetableCatalogEntry};
use super::pending::PendingAddition;

/// Commands understood by the [`InventoryStore`](super::InventoryStore).
#[derive(Debug, Clone)]
pub enum InventoryCommand {
    /// Adds `delta` to an item's quantity, never going below 1.
    AdjustQuantity { id: ItemId, delta: i64 },
    RemoveItem { id: ItemId },
    /// Starts the add flow with a catalog entry.
    BeginAdd { entry: VegetableCatalogEntry },
    SetPendingQuantity { quantity: i64 },
    StepPendingQuantity { delta: i64 },
    /// Adds the pending selection to the inventory, merging on matching id.
    CommitAdd,
    CancelAdd,
    BackToSelecting,
    ListInventory,
    Catalog,
    PendingAddition,
    Snapshot,
}

/// Results from InventoryCommands - variants match 1:1 with InventoryCommand
#[derive(Debug, Clone)]
pub enum InventoryOutcome {
    /// New quantity, or `None` if no item had that id
    AdjustQuantity(Option<u32>),
    /// Whether an item was removed
    RemoveItem(bool),
    BeginAdd(PendingAddition),
    SetPendingQuantity(u32),
    StepPendingQuantity(u32),
    CommitAdd(AddOutcome),
    CancelAdd(()),
    BackToSelecting(()),
    ListInventory(Vec<InventoryItem>),
    Catalog(Vec<VegetableCatalogEntry>),
    PendingAddition(PendingAddition),
    Snapshot(InventorySnapshot),
}

/// What `commit_add` did with the pending selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AddOutcome {
    /// An item with the same id existed; its quantity grew to `quantity`.
    Merged { id: ItemId, quantity: u32 },
    /// A new item was appended.
    Appended { id: ItemId, quantity: u32 },
    /// Nothing was selected, so nothing happened.
    NothingPending,
}

/// Everything the presentation layer needs to redraw the inventory screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySnapshot {
    pub items: Vec<InventoryItem>,
    pub pending: PendingAddition,
}
