//! Typed handles for talking to the store actors.

#[macro_use]
mod macros;

pub mod inventory_client;
pub mod order_client;

pub use inventory_client::*;
pub use order_client::*;
