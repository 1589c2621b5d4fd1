pub mod order;
pub mod inventory;
pub mod catalog;
pub mod notice;

pub use order::*;
pub use inventory::*;
pub use catalog::*;
pub use notice::*;
