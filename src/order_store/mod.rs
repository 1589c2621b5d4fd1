//! Order lifecycle: acceptance, rejection, tracking and the accepted-order history.

mod commands;
pub mod error;
pub mod store;

pub use commands::*;
pub use error::*;
pub use store::*;
