//! # vendor-ops
//!
//! State core for a single vendor's session: customer orders with an
//! accepted-order history, and a vegetable inventory grown from a fixed catalog.
//!
//! - **Domain types** - plain data shared with the presentation layer → [`domain`]
//! - **Stores** - synchronous state containers with the transition rules →
//!   [`order_store::OrderStore`], [`inventory_store::InventoryStore`]
//! - **Actors and clients** - each store owned by one task, reached through a
//!   cloneable client → [`actor_framework`], [`clients`]
//! - **System** - startup, configuration, tracing, shutdown → [`app_system`]
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use vendor_ops::app_system::VendorSystem;
//!
//! let system = VendorSystem::new();
//! let notice = system.order_client.accept_order(1).await?;
//! println!("{}", notice);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod inventory_store;
pub mod order_store;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
