//! `stockroom-core` — inventory building blocks.
//!
//! Identifiers, quantities and the shared error type. No IO.

pub mod entity;
pub mod error;
pub mod id;
pub mod quantity;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
pub use id::{Sku, WarehouseId};
pub use quantity::Quantity;
