//! Command execution against the inventory directory.
//!
//! Every failure carries the operation it came from so the caller can print
//! `ERROR STOCKING: ...` and move on to the next line.

use thiserror::Error;

use stockroom_core::{InventoryError, WarehouseId};
use stockroom_inventory::{ContentRow, InventoryDirectory, StockReceipt};
use stockroom_products::Product;

use crate::command::Command;

/// What a command was trying to do, for error reporting.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    AddingWarehouse,
    AddingProduct,
    Stocking,
    Unstocking,
    Listing,
    Parsing,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::AddingWarehouse => "ADDING WAREHOUSE",
            Operation::AddingProduct => "ADDING PRODUCT",
            Operation::Stocking => "STOCKING",
            Operation::Unstocking => "UNSTOCKING",
            Operation::Listing => "LISTING",
            Operation::Parsing => "PARSING",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::AddWarehouse { .. } => Operation::AddingWarehouse,
            Command::AddProduct { .. } => Operation::AddingProduct,
            Command::Stock { .. } => Operation::Stocking,
            Command::Unstock { .. } => Operation::Unstocking,
            Command::ListProducts | Command::ListWarehouses | Command::ListWarehouse(_) => {
                Operation::Listing
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ERROR {operation}: {source}")]
pub struct DispatchError {
    pub operation: Operation,
    #[source]
    pub source: InventoryError,
}

impl DispatchError {
    pub fn new(operation: Operation, source: InventoryError) -> Self {
        Self { operation, source }
    }
}

/// Successful result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    WarehouseAdded(WarehouseId),
    ProductAdded(Product),
    Stocked(StockReceipt),
    Unstocked(StockReceipt),
    Products(Vec<Product>),
    Warehouses(Vec<WarehouseId>),
    Contents {
        warehouse: WarehouseId,
        rows: Vec<ContentRow>,
    },
}

/// Owns the directory for the lifetime of a session and routes commands to it.
#[derive(Debug, Default)]
pub struct CommandDispatcher {
    directory: InventoryDirectory,
}

impl CommandDispatcher {
    pub fn new(directory: InventoryDirectory) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &InventoryDirectory {
        &self.directory
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Reply, DispatchError> {
        let operation = command.operation();
        self.execute(command)
            .map_err(|source| DispatchError::new(operation, source))
    }

    fn execute(&mut self, command: Command) -> Result<Reply, InventoryError> {
        let dir = &mut self.directory;
        match command {
            Command::AddWarehouse { id, limit } => {
                dir.add_warehouse(id.clone(), limit)?;
                Ok(Reply::WarehouseAdded(id))
            }
            Command::AddProduct { name, sku } => {
                let product = dir.add_product(name, sku)?;
                Ok(Reply::ProductAdded(product.clone()))
            }
            Command::Stock {
                sku,
                warehouse,
                quantity,
            } => dir.stock(&sku, &warehouse, quantity).map(Reply::Stocked),
            Command::Unstock {
                sku,
                warehouse,
                quantity,
            } => dir.unstock(&sku, &warehouse, quantity).map(Reply::Unstocked),
            Command::ListProducts => Ok(Reply::Products(dir.list_products().cloned().collect())),
            Command::ListWarehouses => {
                Ok(Reply::Warehouses(dir.list_warehouses().cloned().collect()))
            }
            Command::ListWarehouse(warehouse) => {
                let rows = dir.list_warehouse_contents(&warehouse)?;
                Ok(Reply::Contents { warehouse, rows })
            }
        }
    }
}
