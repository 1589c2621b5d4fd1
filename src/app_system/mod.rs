//! Runtime orchestration and lifecycle management.
//!
//! - [`VendorSystem`] - starts the order and inventory actors and shuts them down
//! - [`SystemConfig`] - channel sizing, seed data and catalog
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod config;
pub mod error;
pub mod telemetry;
pub mod vendor_system;

pub use config::*;
pub use error::*;
pub use telemetry::*;
pub use vendor_system::*;
