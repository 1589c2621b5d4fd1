use serde::{Deserialize, Serialize};
use crate::app_system::SystemError;
use crate::domain::{Catalog, InventoryItem, Order};

/// Default capacity of each actor's request channel.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Orders and inventory the session starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

impl SeedData {
    /// Parses seed data from JSON, e.g. supplied by the presentation layer.
    pub fn from_json(json: &str) -> Result<Self, SystemError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            orders: vec![
                Order::new(1, "Vivek Kushwaha", "Tomato", 5),
                Order::new(2, "Anant Bahore", "Potato", 3),
                Order::new(3, "Vinayak Badole", "Carrot", 8),
                Order::new(4, "Vedansh Shrivastava", "Potato", 3),
                Order::new(5, "Yugal Sangavi", "Potato", 3),
            ],
            inventory: vec![
                InventoryItem::new(1, "Cabbage", 5),
                InventoryItem::new(2, "Potato", 10),
                InventoryItem::new(3, "Onion", 14),
            ],
        }
    }
}

/// Everything needed to start a [`VendorSystem`](crate::app_system::VendorSystem).
#[derive(Debug, Clone)]
pub struct SystemConfig {
    pub buffer_size: usize,
    pub seed: SeedData,
    pub catalog: Catalog,
}

impl SystemConfig {
    pub fn with_seed(seed: SeedData) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            seed: SeedData::default(),
            catalog: Catalog::standard(),
        }
    }
}
