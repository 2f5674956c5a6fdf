//! Inventory error model.

use thiserror::Error;

use crate::id::{Sku, WarehouseId};

/// Result type used across the inventory layers.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Lookup and duplication failures are recoverable: the command that caused
/// them is a no-op and the session carries on. Malformed input aborts the
/// current command only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A product with this SKU is already in the catalog.
    #[error("product with SKU {0} already exists")]
    DuplicateSku(Sku),

    /// A warehouse with this id already exists.
    #[error("warehouse {0} already exists")]
    DuplicateWarehouse(WarehouseId),

    #[error("product with SKU {0} does not exist")]
    UnknownSku(Sku),

    #[error("invalid warehouse id {0}")]
    UnknownWarehouse(WarehouseId),

    /// The SKU is in the catalog but has no entry in the warehouse.
    #[error("product with SKU {sku} is not stocked in warehouse {warehouse}")]
    NotStocked { sku: Sku, warehouse: WarehouseId },

    #[error("warehouse {0} holds no products")]
    EmptyWarehouse(WarehouseId),

    /// Quantity text was not a non-negative integer.
    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),

    /// Wrong token count, unknown verb or badly quoted argument.
    #[error("malformed command: {0}")]
    MalformedCommand(String),
}

impl InventoryError {
    pub fn invalid_quantity(raw: impl Into<String>) -> Self {
        Self::InvalidQuantity(raw.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedCommand(msg.into())
    }

    /// `true` for catalog/warehouse lookup and duplication failures.
    ///
    /// `false` for input errors that abort the command being parsed.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            InventoryError::InvalidQuantity(_) | InventoryError::MalformedCommand(_)
        )
    }
}
