use serde::{Deserialize, Serialize};
use crate::domain::ItemId;

/// Template for a vegetable that can be added to the inventory.
///
/// `quantity` is only a suggested starting figure; the add flow always starts
/// from its own pending quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VegetableCatalogEntry {
    pub id: ItemId,
    pub vegetable: String,
    pub quantity: u32,
}

impl VegetableCatalogEntry {
    pub fn new(id: ItemId, vegetable: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            vegetable: vegetable.into(),
            quantity,
        }
    }
}

const STANDARD_ENTRIES: &[(ItemId, &str, u32)] = &[
    (4, "Cauliflower", 10),
    (5, "Ladyfinger", 12),
    (6, "Spinach", 8),
    (7, "Carrot", 15),
    (8, "Brinjal", 9),
    (9, "Tomato", 13),
    (10, "Cucumber", 11),
    (11, "Beetroot", 7),
    (12, "Capsicum", 6),
    (13, "Peas", 10),
];

/// Read-only table of addable vegetables. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    entries: Vec<VegetableCatalogEntry>,
}

impl Catalog {
    /// The compiled-in vegetable table.
    pub fn standard() -> Self {
        Self::from_entries(
            STANDARD_ENTRIES
                .iter()
                .map(|&(id, name, quantity)| VegetableCatalogEntry::new(id, name, quantity))
                .collect(),
        )
    }

    pub fn from_entries(entries: Vec<VegetableCatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[VegetableCatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: ItemId) -> Option<&VegetableCatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
