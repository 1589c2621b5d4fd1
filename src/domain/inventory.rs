use serde::{Deserialize, Serialize};

pub type ItemId = u32;

/// Represents a vegetable stocked by the vendor.
///
/// `quantity` is shown to the vendor as "Rs/kg" while also behaving as a stock
/// amount; both readings share this one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub vegetable: String,
    pub quantity: u32,
}

impl InventoryItem {
    pub fn new(id: ItemId, vegetable: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            vegetable: vegetable.into(),
            quantity,
        }
    }
}
