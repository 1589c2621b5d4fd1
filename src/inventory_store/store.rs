use std::collections::HashSet;
use tracing::{debug, info, warn};
use crate::actor_framework::Store;
use crate::domain::{Catalog, InventoryItem, ItemId, VegetableCatalogEntry};
use super::commands::{AddOutcome, InventoryCommand, InventoryOutcome, InventorySnapshot};
use super::pending::{clamp_quantity, PendingAddition, MIN_QUANTITY};

/// Owns the vendor's inventory, the catalog it can be extended from, and the
/// in-progress addition.
///
/// Items keep insertion order and ids stay unique: adding a vegetable that is
/// already stocked grows the existing entry instead of appending another.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
    catalog: Catalog,
    pending: PendingAddition,
}

impl InventoryStore {
    /// Builds the store from seed items and a catalog.
    ///
    /// A repeated id keeps only its first item; a zero quantity is raised to 1.
    pub fn new(seed: Vec<InventoryItem>, catalog: Catalog) -> Self {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(seed.len());
        for mut item in seed {
            if !seen.insert(item.id) {
                warn!(item_id = item.id, "Dropping seed item with duplicate id");
                continue;
            }
            if item.quantity < MIN_QUANTITY {
                warn!(item_id = item.id, "Raising seed item quantity to the minimum");
                item.quantity = MIN_QUANTITY;
            }
            items.push(item);
        }
        Self {
            items,
            catalog,
            pending: PendingAddition::default(),
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pending(&self) -> &PendingAddition {
        &self.pending
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Sets the item's quantity to `max(1, quantity + delta)`.
    ///
    /// Returns the new quantity, or `None` when no item has `id`.
    pub fn adjust_quantity(&mut self, id: ItemId, delta: i64) -> Option<u32> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!(item_id = id, "Item not found, nothing to adjust");
            return None;
        };
        item.quantity = clamp_quantity(i64::from(item.quantity).saturating_add(delta));
        debug!(item_id = id, delta, quantity = item.quantity, "Quantity adjusted");
        Some(item.quantity)
    }

    /// Deletes the item with `id`. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() < before;
        if removed {
            info!(item_id = id, "Item removed from inventory");
        } else {
            debug!(item_id = id, "Item not found, nothing to remove");
        }
        removed
    }

    /// Selects a catalog entry for addition with a pending quantity of 1.
    pub fn begin_add(&mut self, entry: VegetableCatalogEntry) -> PendingAddition {
        debug!(item_id = entry.id, vegetable = %entry.vegetable, "Add flow started");
        self.pending.select(entry);
        self.pending.clone()
    }

    pub fn set_pending_quantity(&mut self, quantity: i64) -> u32 {
        self.pending.set_quantity(quantity)
    }

    pub fn step_pending_quantity(&mut self, delta: i64) -> u32 {
        self.pending.step_quantity(delta)
    }

    /// Adds the pending selection to the inventory.
    ///
    /// If an item with the selection's id is already stocked, its quantity
    /// grows by the pending quantity. Otherwise a new item is appended. The
    /// pending state is reset afterwards, so a second call without a new
    /// selection does nothing.
    pub fn commit_add(&mut self) -> AddOutcome {
        let Some((entry, quantity)) = self.pending.take() else {
            debug!("No pending selection, nothing to add");
            return AddOutcome::NothingPending;
        };

        match self.items.iter_mut().find(|item| item.id == entry.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
                info!(item_id = entry.id, added = quantity, quantity = existing.quantity, "Merged into existing item");
                AddOutcome::Merged {
                    id: entry.id,
                    quantity: existing.quantity,
                }
            }
            None => {
                info!(item_id = entry.id, vegetable = %entry.vegetable, quantity, "Appended new item");
                self.items.push(InventoryItem::new(entry.id, entry.vegetable, quantity));
                AddOutcome::Appended {
                    id: entry.id,
                    quantity,
                }
            }
        }
    }

    pub fn cancel_add(&mut self) {
        debug!("Add flow cancelled");
        self.pending.reset();
    }

    /// Drops the current selection so another vegetable can be picked.
    pub fn back_to_selecting(&mut self) {
        debug!("Add flow back to selection");
        self.pending.reset();
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            items: self.items.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new(Vec::new(), Catalog::standard())
    }
}

impl Store for InventoryStore {
    type Command = InventoryCommand;
    type Outcome = InventoryOutcome;

    const NAME: &'static str = "inventory_store";

    fn apply(&mut self, command: InventoryCommand) -> InventoryOutcome {
        match command {
            InventoryCommand::AdjustQuantity { id, delta } => {
                InventoryOutcome::AdjustQuantity(self.adjust_quantity(id, delta))
            }
            InventoryCommand::RemoveItem { id } => InventoryOutcome::RemoveItem(self.remove_item(id)),
            InventoryCommand::BeginAdd { entry } => InventoryOutcome::BeginAdd(self.begin_add(entry)),
            InventoryCommand::SetPendingQuantity { quantity } => {
                InventoryOutcome::SetPendingQuantity(self.set_pending_quantity(quantity))
            }
            InventoryCommand::StepPendingQuantity { delta } => {
                InventoryOutcome::StepPendingQuantity(self.step_pending_quantity(delta))
            }
            InventoryCommand::CommitAdd => InventoryOutcome::CommitAdd(self.commit_add()),
            InventoryCommand::CancelAdd => {
                self.cancel_add();
                InventoryOutcome::CancelAdd(())
            }
            InventoryCommand::BackToSelecting => {
                self.back_to_selecting();
                InventoryOutcome::BackToSelecting(())
            }
            InventoryCommand::ListInventory => InventoryOutcome::ListInventory(self.items.clone()),
            InventoryCommand::Catalog => InventoryOutcome::Catalog(self.catalog.entries().to_vec()),
            InventoryCommand::PendingAddition => {
                InventoryOutcome::PendingAddition(self.pending.clone())
            }
            InventoryCommand::Snapshot => InventoryOutcome::Snapshot(self.snapshot()),
        }
    }
}
