//! Inventory domain module.
//!
//! Warehouse stock ledgers and the directory that owns them, implemented as
//! deterministic in-memory logic (no IO, no parsing, no rendering).

pub mod directory;
pub mod ledger;

pub use directory::{ContentRow, InventoryDirectory, StockReceipt};
pub use ledger::{
    CapacityLedger, StockEntries, StockEntry, StockLedger, UnboundedLedger, WarehouseSnapshot,
};
