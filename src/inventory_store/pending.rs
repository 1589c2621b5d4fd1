use serde::Serialize;
use crate::domain::VegetableCatalogEntry;

/// Smallest quantity an inventory item or pending addition can hold.
pub const MIN_QUANTITY: u32 = 1;

/// Clamps a signed quantity into `MIN_QUANTITY..=u32::MAX`.
pub fn clamp_quantity(value: i64) -> u32 {
    value.clamp(i64::from(MIN_QUANTITY), i64::from(u32::MAX)) as u32
}

/// Where the add flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddFlowPhase {
    /// No vegetable selected; the catalog is shown.
    Idle,
    /// A vegetable is selected and its quantity is being chosen.
    Configuring,
}

/// Transient selection state of the add-to-inventory flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingAddition {
    selection: Option<VegetableCatalogEntry>,
    quantity: u32,
}

impl PendingAddition {
    pub fn selection(&self) -> Option<&VegetableCatalogEntry> {
        self.selection.as_ref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn phase(&self) -> AddFlowPhase {
        match self.selection {
            Some(_) => AddFlowPhase::Configuring,
            None => AddFlowPhase::Idle,
        }
    }

    pub(crate) fn select(&mut self, entry: VegetableCatalogEntry) {
        self.selection = Some(entry);
        self.quantity = MIN_QUANTITY;
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) -> u32 {
        self.quantity = clamp_quantity(quantity);
        self.quantity
    }

    pub(crate) fn step_quantity(&mut self, delta: i64) -> u32 {
        self.set_quantity(i64::from(self.quantity).saturating_add(delta))
    }

    /// Takes the selection out and resets the quantity.
    pub(crate) fn take(&mut self) -> Option<(VegetableCatalogEntry, u32)> {
        let quantity = self.quantity;
        self.quantity = MIN_QUANTITY;
        self.selection.take().map(|entry| (entry, quantity))
    }

    pub(crate) fn reset(&mut self) {
        self.selection = None;
        self.quantity = MIN_QUANTITY;
    }
}

impl Default for PendingAddition {
    fn default() -> Self {
        Self {
            selection: None,
            quantity: MIN_QUANTITY,
        }
    }
}
