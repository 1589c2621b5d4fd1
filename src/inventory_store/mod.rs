//! Inventory stock management and the add-or-merge flow fed by the vegetable catalog.

mod commands;
pub mod error;
pub mod pending;
pub mod store;

pub use commands::*;
pub use error::*;
pub use pending::*;
pub use store::*;
